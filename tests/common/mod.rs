pub mod fixtures {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// Write route and address fixtures into a fresh temporary directory.
    ///
    /// The directory handle must stay alive for as long as the paths are
    /// used; dropping it deletes everything.
    pub fn write_input_files(routes: &str, addresses: &str) -> (TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let route_path = dir.path().join("routes.txt");
        let address_path = dir.path().join("addresses.txt");

        fs::write(&route_path, routes).expect("write route fixture");
        fs::write(&address_path, addresses).expect("write address fixture");

        (dir, route_path, address_path)
    }
}
