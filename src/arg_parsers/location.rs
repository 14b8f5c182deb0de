use std::{ffi::OsStr, path::PathBuf};

/// Where output goes: a path on disk, or standard output when given as `-`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Location {
    Path(PathBuf),
    #[default]
    Stdio,
}

impl From<&OsStr> for Location {
    fn from(value: &OsStr) -> Self {
        if value == OsStr::new("-") {
            Location::Stdio
        } else {
            Location::Path(PathBuf::from(value))
        }
    }
}

impl From<PathBuf> for Location {
    fn from(value: PathBuf) -> Self {
        Location::from(value.as_os_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_is_stdio() {
        assert_eq!(Location::from(OsStr::new("-")), Location::Stdio);
        assert_eq!(
            Location::from(PathBuf::from("out.zip")),
            Location::Path(PathBuf::from("out.zip"))
        );
        assert_eq!(
            Location::from(OsStr::new("./-")),
            Location::Path(PathBuf::from("./-"))
        );
    }
}
