//! バインド指定から Docker API パラメータへの変換

use crate::error::Result;
use bollard::models::HostConfig;
use dockbind_core::Binds;
use tracing::debug;

/// Docker APIの `HostConfig.Binds` に渡す文字列に変換
pub fn binds_to_strings(binds: &Binds) -> Vec<String> {
    binds.to_strings()
}

/// バインドだけを設定した `HostConfig` を生成
pub fn host_config_with_binds(binds: &Binds) -> HostConfig {
    let mut host_config = HostConfig::default();
    apply_binds(&mut host_config, binds);
    host_config
}

/// 既存の `HostConfig` にバインドを追加
///
/// 既に設定されているバインドは残し、その後ろに追加します。
pub fn apply_binds(host_config: &mut HostConfig, binds: &Binds) {
    let rendered = binds_to_strings(binds);
    debug!(binds = ?rendered, "applying binds to host config");
    host_config
        .binds
        .get_or_insert_with(Vec::new)
        .extend(rendered);
}

/// 文字列のバインド指定をパースして `HostConfig` を生成
pub fn host_config_from_specs<S: AsRef<str>>(specs: &[S]) -> Result<HostConfig> {
    let binds = Binds::parse_all(specs)?;
    Ok(host_config_with_binds(&binds))
}
