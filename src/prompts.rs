//! Instruction text sent to the chat-completions API in delegated mode.
//!
//! The service went through several generations of this prompt; every
//! revision is kept selectable (`SPECTRO_PROMPT_REV`) so earlier behavior
//! stays reproducible. Each revision asks for everything the previous one
//! asked for and more.

use std::str::FromStr;

use indoc::formatdoc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptRevision {
    /// One-paragraph request for the three techniques.
    Basic,
    /// Numbered per-technique sections with required table columns.
    Sectioned,
    /// Per-row confidence annotations and machine-readable table rules.
    Annotated,
    /// Closing section of suggested follow-up questions.
    #[default]
    Guided,
}

impl PromptRevision {
    pub fn number(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Sectioned => 2,
            Self::Annotated => 3,
            Self::Guided => 4,
        }
    }

    /// Renders the instruction text with the molecule embedded.
    pub fn render(self, molecule: &str) -> String {
        match self {
            Self::Basic => basic(molecule),
            Self::Sectioned => sectioned(molecule),
            Self::Annotated => annotated(molecule),
            Self::Guided => guided(molecule),
        }
    }
}

impl FromStr for PromptRevision {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Basic),
            "2" => Ok(Self::Sectioned),
            "3" => Ok(Self::Annotated),
            "4" => Ok(Self::Guided),
            _ => Err(()),
        }
    }
}

fn basic(molecule: &str) -> String {
    formatdoc! {"
        You are a spectroscopy assistant. Report the expected IR, UV-Vis and NMR
        spectroscopy data for the molecule \"{molecule}\". Present the data for each
        technique as a markdown table of its characteristic peaks.
    "}
}

fn sectioned(molecule: &str) -> String {
    formatdoc! {"
        You are an expert analytical chemist. Produce a spectroscopy report for the
        molecule \"{molecule}\" in markdown, with the following numbered sections:

        1. IR spectroscopy: a table of the major absorption bands, with columns
           Wavenumber (cm-1), Assignment, Intensity.
        2. UV-Vis spectroscopy: a table of the absorption maxima, with columns
           Wavelength (nm), Transition, Molar absorptivity.
        3. NMR spectroscopy: a 1H table and a 13C table, with columns
           Chemical shift (ppm), Assignment, Multiplicity.

        Use literature values where they are known and typical values otherwise.
    "}
}

fn annotated(molecule: &str) -> String {
    formatdoc! {"
        You are an expert analytical chemist. Produce a spectroscopy report for the
        molecule \"{molecule}\" in markdown, with the following numbered sections:

        1. IR spectroscopy: a table of the major absorption bands, with columns
           Wavenumber (cm-1), Assignment, Intensity, Confidence.
        2. UV-Vis spectroscopy: a table of the absorption maxima, with columns
           Wavelength (nm), Transition, Molar absorptivity, Confidence.
        3. NMR spectroscopy: a 1H table and a 13C table, with columns
           Chemical shift (ppm), Assignment, Multiplicity, Confidence.

        Use literature values where they are known and typical values otherwise.
        Annotate every row with a confidence of high, medium or low.

        The tables must be machine readable: use exactly the column headers listed
        above, one peak or band per row, no prose inside table cells, and n/a for
        any value you cannot estimate. Do not add commentary between the tables.

        With no preamble, respond with the markdown report only.
    "}
}

fn guided(molecule: &str) -> String {
    formatdoc! {"
        You are an expert analytical chemist. Produce a spectroscopy report for the
        molecule \"{molecule}\" in markdown, with the following numbered sections:

        1. IR spectroscopy: a table of the major absorption bands, with columns
           Wavenumber (cm-1), Assignment, Intensity, Confidence.
        2. UV-Vis spectroscopy: a table of the absorption maxima, with columns
           Wavelength (nm), Transition, Molar absorptivity, Confidence.
        3. NMR spectroscopy: a 1H table and a 13C table, with columns
           Chemical shift (ppm), Assignment, Multiplicity, Confidence.
        4. Follow-up questions: a short list of three questions a chemist might
           ask next about this molecule's spectra.

        Use literature values where they are known and typical values otherwise.
        Annotate every row with a confidence of high, medium or low.

        The tables must be machine readable: use exactly the column headers listed
        above, one peak or band per row, no prose inside table cells, and n/a for
        any value you cannot estimate. Do not add commentary between the tables.

        With no preamble, respond with the markdown report only.
    "}
}
