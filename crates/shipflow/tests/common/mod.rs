#![allow(deprecated)] // TODO: cargo_bin → cargo_bin_cmd! へ移行

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }

    #[allow(dead_code)]
    pub fn write_ship_kdl(&self, content: &str) {
        fs::write(self.root.path().join("ship.kdl"), content).unwrap();
    }

    #[allow(dead_code)]
    pub fn write(&self, name: &str, content: &str) {
        let path = self.root.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[allow(dead_code)]
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.root.path().join(name)).unwrap()
    }

    #[allow(dead_code)]
    pub fn exists(&self, name: &str) -> bool {
        self.root.path().join(name).exists()
    }

    /// `sh <step>` で実行されるスクリプトを置く（engine を sh にした場合の偽エンジン）
    #[allow(dead_code)]
    pub fn write_step_script(&self, step: &str, body: &str) {
        self.write(step, &format!("echo {} \"$@\" >> calls.log\n{}\n", step, body));
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<String> {
        if !self.exists("calls.log") {
            return Vec::new();
        }
        self.read("calls.log").lines().map(|l| l.to_string()).collect()
    }

    /// プロジェクトディレクトリで ship を実行するコマンド（ユーザー環境の設定は無視）
    pub fn ship(&self) -> Command {
        let mut cmd = Command::cargo_bin("ship").unwrap();
        cmd.current_dir(self.root.path())
            .env("XDG_CONFIG_HOME", self.root.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("SHIP_CONFIG_PATH")
            .env_remove("SHIP_ENGINE")
            .env_remove("SHIP_TAG")
            .env_remove("SHIP_CREDENTIAL_FILE");
        cmd
    }
}
