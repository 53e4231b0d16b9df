use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 一時ディレクトリ上のテスト用プロジェクト
pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    pub fn write_binds_yaml(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// 環境の設定ファイルに影響されない dockbind コマンド
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dockbind").unwrap();
        cmd.current_dir(self.path())
            .env_remove("DOCKBIND_CONFIG_PATH")
            .env("XDG_CONFIG_HOME", self.path().join("xdg"))
            .env("HOME", self.path());
        cmd
    }
}
