use serde::{Deserialize, Serialize};

/// Fixed `source` label attached to every delegated response.
pub const SOURCE_LABEL: &str = "openai";

#[derive(Debug, Deserialize)]
pub struct MoleculeRequest {
    // Read permissively: a missing field becomes an empty string and is
    // rejected by validation rather than by deserialization.
    #[serde(default)]
    pub molecule: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn alive() -> Self {
        Self {
            status: "ok",
            service: "chemgpt-spectro",
            message: "Spectroscopy microservice is alive!",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SpectroscopyResponse {
    Dummy(DummySpectra),
    Delegated(DelegatedSpectra),
}

#[derive(Debug, Serialize)]
pub struct DummySpectra {
    pub molecule: String,
    pub uv: UvSpectrum,
    pub ir: IrSpectrum,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UvSpectrum {
    pub peaks: Vec<UvPeak>,
}

#[derive(Debug, Serialize)]
pub struct UvPeak {
    pub wavelength: u32,
    pub intensity: &'static str,
}

#[derive(Debug, Serialize)]
pub struct IrSpectrum {
    pub peaks: Vec<IrPeak>,
}

#[derive(Debug, Serialize)]
pub struct IrPeak {
    pub wavenumber: u32,
    pub intensity: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DelegatedSpectra {
    pub molecule: String,
    pub spectra_markdown: Box<str>,
    pub source: &'static str,
}

impl SpectroscopyResponse {
    /// Canned peak lists. The molecule is echoed back but its chemical
    /// identity plays no part in the payload.
    pub fn dummy(molecule: &str) -> Self {
        SpectroscopyResponse::Dummy(DummySpectra {
            molecule: molecule.to_owned(),
            uv: UvSpectrum {
                peaks: vec![UvPeak {
                    wavelength: 254,
                    intensity: "high",
                }],
            },
            ir: IrSpectrum {
                peaks: vec![IrPeak {
                    wavenumber: 1600,
                    intensity: "strong",
                }],
            },
            message: "Spectra generated (dummy response)",
        })
    }

    pub fn delegated(molecule: &str, spectra_markdown: Box<str>) -> Self {
        SpectroscopyResponse::Delegated(DelegatedSpectra {
            molecule: molecule.to_owned(),
            spectra_markdown,
            source: SOURCE_LABEL,
        })
    }
}
