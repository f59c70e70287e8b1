use std::fmt;

pub(crate) const SUPER_SOURCE_NAME: &str = "__super_source__";

/// Service class carried by a segment. `None` is reserved for synthetic
/// super-source edges and never appears in loaded data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    Standard,
    AlfaPendular,
    None,
}

impl Service {
    /// Fixed per-edge increment used by the cost-augmented solver.
    pub fn cost(self) -> u32 {
        match self {
            Service::Standard => 2,
            Service::AlfaPendular => 4,
            Service::None => 0,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Service::Standard => "STANDARD",
            Service::AlfaPendular => "ALFA PENDULAR",
            Service::None => "-",
        };
        f.write_str(label)
    }
}

/// One station record. The name is the unique key; the line groups
/// stations between which flow queries are permitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Station {
    name: String,
    district: String,
    municipality: String,
    township: String,
    line: String,
}

impl Station {
    pub fn new(
        name: impl Into<String>,
        district: impl Into<String>,
        municipality: impl Into<String>,
        township: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            district: district.into(),
            municipality: municipality.into(),
            township: township.into(),
            line: line.into(),
        }
    }

    /// Sentinel station for the transient super-source vertex. Never
    /// registered in the name index, so it cannot collide with real data.
    pub(crate) fn synthetic(line: &str) -> Self {
        Self::new(SUPER_SOURCE_NAME, "", "", "", line)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn district(&self) -> &str {
        &self.district
    }

    pub fn municipality(&self) -> &str {
        &self.municipality
    }

    pub fn township(&self) -> &str {
        &self.township
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}
