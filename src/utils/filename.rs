use std::{collections::HashSet, path::Path};

/// Replaces the extension of a bare file name, or appends one if there is none.
/// `holiday.jpeg` becomes `holiday.png`.
pub fn replace_extension(file_name: &str, extension: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);
    format!("{stem}.{extension}")
}

/// Inserts `suffix` between the stem and the extension.
/// If no extension is present, appends to the end.
pub fn insert_suffix_before_extension(file_name: &str, suffix: &str) -> String {
    let path = Path::new(file_name);
    match (
        path.file_stem().and_then(|s| s.to_str()),
        path.extension().and_then(|s| s.to_str()),
    ) {
        (Some(stem), Some(ext)) => format!("{stem}{suffix}.{ext}"),
        _ => format!("{file_name}{suffix}"),
    }
}

/// Hands out file names that are unique within one batch,
/// numbering repeats as `photo_1.png`, `photo_2.png` and so on.
#[derive(Debug, Default)]
pub struct UniqueNames {
    taken: HashSet<String>,
}

impl UniqueNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, wanted: &str) -> String {
        if self.taken.insert(wanted.to_owned()) {
            return wanted.to_owned();
        }
        let mut counter = 1u32;
        loop {
            let candidate = insert_suffix_before_extension(wanted, &format!("_{counter}"));
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            counter += 1;
        }
    }
}
