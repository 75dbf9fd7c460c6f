//! Minimal fontconfig descriptor pointing the typesetting engine at the
//! host's system font directories.
//!
//! The directory set depends on the OS family; new platforms are added as
//! `OsFamily` variants, not inline conditionals.

use std::env;
use std::path::PathBuf;

/// Host operating-system family, mapped to its system font locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
}

impl OsFamily {
    /// Family of the running host.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            OsFamily::Windows
        } else if cfg!(target_os = "macos") {
            OsFamily::MacOs
        } else {
            OsFamily::Linux
        }
    }

    /// Font directories the engine should scan for this family.
    pub fn font_dirs(self) -> Vec<PathBuf> {
        match self {
            OsFamily::Windows => {
                let mut dirs = vec![PathBuf::from("C:/Windows/Fonts")];
                if let Ok(local) = env::var("LOCALAPPDATA") {
                    dirs.push(
                        PathBuf::from(local)
                            .join("Microsoft")
                            .join("Windows")
                            .join("Fonts"),
                    );
                }
                dirs
            }
            OsFamily::MacOs => vec![
                PathBuf::from("/System/Library/Fonts"),
                PathBuf::from("/Library/Fonts"),
            ],
            OsFamily::Linux => vec![
                PathBuf::from("/usr/share/fonts"),
                PathBuf::from("/usr/local/share/fonts"),
            ],
        }
    }
}

/// Renders the fontconfig XML document for `family`.
///
/// Supplied to the engine through the `FONTCONFIG_FILE` environment
/// variable so a minimal install still resolves system fonts.
pub fn render_fontconfig(family: OsFamily) -> String {
    let dirs = family
        .font_dirs()
        .into_iter()
        .map(|dir| format!("  <dir>{}</dir>", dir.display()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\"?>\n\
         <!DOCTYPE fontconfig SYSTEM \"fonts.dtd\">\n\
         <fontconfig>\n{dirs}\n</fontconfig>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_has_font_dirs() {
        for family in [OsFamily::Windows, OsFamily::MacOs, OsFamily::Linux] {
            assert!(!family.font_dirs().is_empty(), "{family:?} has no dirs");
        }
    }

    #[test]
    fn test_linux_dirs_cover_system_font_roots() {
        let dirs = OsFamily::Linux.font_dirs();
        assert!(dirs.contains(&PathBuf::from("/usr/share/fonts")));
        assert!(dirs.contains(&PathBuf::from("/usr/local/share/fonts")));
    }

    #[test]
    fn test_rendered_xml_wraps_dirs() {
        let xml = render_fontconfig(OsFamily::MacOs);
        assert!(xml.starts_with("<?xml version=\"1.0\"?>"));
        assert!(xml.contains("<fontconfig>"));
        assert!(xml.contains("<dir>/System/Library/Fonts</dir>"));
        assert!(xml.trim_end().ends_with("</fontconfig>"));
    }

    #[test]
    fn test_current_family_resolves() {
        // Whatever the host is, it must map to a non-empty dir set.
        assert!(!OsFamily::current().font_dirs().is_empty());
    }
}
