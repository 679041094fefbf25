//! Fixture files shared by the CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Request rating ride 1 a 5 and ride 2 a 2 for a 50 inch rider, with ride
/// 3 requiring 54 inches.
pub(super) const REQUEST_JSON: &str = r#"{
    "profile": {
        "height_inches": 50,
        "ride_preferences": [
            { "ride_id": 1, "rating": 5 },
            { "ride_id": 2, "rating": 2 }
        ]
    },
    "height_requirements": { "3": 54 }
}"#;

/// Queue-Times document for the request above.
pub(super) const QUEUE_TIMES_JSON: &str = r#"{
    "lands": [
        { "id": 1, "name": "Port of Entry", "rides": [
            { "id": 1, "name": "Hogwarts Express", "is_open": true, "wait_time": 20 },
            { "id": 2, "name": "Storm Force Accelatron", "is_open": true, "wait_time": 5 },
            { "id": 3, "name": "The Incredible Hulk Coaster", "is_open": true, "wait_time": 0 },
            { "id": 4, "name": "Jurassic Park River Adventure", "is_open": false, "wait_time": 0 }
        ]}
    ],
    "rides": []
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory addressed by UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}
