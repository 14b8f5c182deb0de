use current_platform::CURRENT_PLATFORM;

/// Long version banner shown by `--version`.
pub fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    let license = env!("CARGO_PKG_LICENSE");
    format!("{version} {cpu}\nLicense: {license}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_version_and_cpu() {
        let banner = version_string();
        assert!(banner.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(banner.contains(CURRENT_PLATFORM.split('-').next().unwrap()));
        assert!(banner.contains("MIT OR Apache-2.0"));
    }
}
