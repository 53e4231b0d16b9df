pub mod check;
pub mod parse;

use colored::Colorize;
use dockbind_core::Bind;

/// 未設定の値は '-' で表示
fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// バインドの各フィールドを表示
pub(crate) fn print_bind(bind: &Bind) {
    println!("{} {}", "✓".green(), bind.to_string().cyan());
    println!("  host:        {}", bind.host_path());
    println!("  container:   {}", bind.volume().path());
    println!("  access:      {}", bind.access_mode());
    println!("  selinux:     {}", or_dash(bind.sel_context().as_str()));
    println!(
        "  nocopy:      {}",
        bind.no_copy().map_or("-".to_string(), |v| v.to_string())
    );
    println!("  propagation: {}", or_dash(bind.propagation_mode().as_str()));
}
