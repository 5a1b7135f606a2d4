//! Build-time program information.

/// Name and version baked in from Cargo metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    /// Display name used in the banner.
    pub name: &'static str,
    /// Executable name used in the usage line.
    pub binary: &'static str,
    pub major: &'static str,
    pub minor: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            name: "TileMerge",
            binary: env!("CARGO_PKG_NAME"),
            major: env!("CARGO_PKG_VERSION_MAJOR"),
            minor: env!("CARGO_PKG_VERSION_MINOR"),
        }
    }

    /// `TileMerge vMAJOR.MINOR`
    pub fn banner(&self) -> String {
        format!("{} v{}.{}", self.name, self.major, self.minor)
    }

    /// Banner followed by a one-line usage summary.
    pub fn usage(&self) -> String {
        format!("{}\nusage: {} <tileset.xml>", self.banner(), self.binary)
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_format() {
        let info = BuildInfo {
            name: "TileMerge",
            binary: "tilemerge",
            major: "1",
            minor: "0",
        };
        assert_eq!(info.banner(), "TileMerge v1.0");
        assert_eq!(info.usage(), "TileMerge v1.0\nusage: tilemerge <tileset.xml>");
    }

    #[test]
    fn test_current_matches_package() {
        let info = BuildInfo::current();
        assert_eq!(info.binary, "tilemerge");
        assert_eq!(
            format!("{}.{}", info.major, info.minor),
            env!("CARGO_PKG_VERSION").rsplit_once('.').unwrap().0
        );
    }
}
