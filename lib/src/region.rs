use std::str::FromStr;

/// The data centers hosting the pCloud API
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Region {
    Europe,
    #[default]
    UnitedStates,
}

impl Region {
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Europe => crate::EU_REGION,
            Self::UnitedStates => crate::US_REGION,
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value {
            "eu" | "EU" => Some(Self::Europe),
            "us" | "US" => Some(Self::UnitedStates),
            _ => None,
        }
    }

    /// Reads the region from the `PCLOUD_REGION` environment variable.
    pub fn from_env() -> Option<Self> {
        std::env::var("PCLOUD_REGION")
            .ok()
            .and_then(|value| Self::from_name(value.as_str()))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown region {0:?}, expected \"eu\" or \"us\"")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_name(value).ok_or_else(|| UnknownRegion(value.to_string()))
    }
}
