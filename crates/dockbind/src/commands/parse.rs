use anyhow::Result;
use dockbind_core::Bind;
use serde::Serialize;

/// `--json` 出力用のバインド表現
#[derive(Debug, Serialize)]
struct BindView<'a> {
    spec: String,
    host_path: &'a str,
    container_path: &'a str,
    access_mode: &'static str,
    sel_context: Option<&'a str>,
    no_copy: Option<bool>,
    propagation_mode: Option<&'static str>,
}

impl<'a> From<&'a Bind> for BindView<'a> {
    fn from(bind: &'a Bind) -> Self {
        Self {
            spec: bind.to_string(),
            host_path: bind.host_path(),
            container_path: bind.volume().path(),
            access_mode: bind.access_mode().as_str(),
            sel_context: (!bind.sel_context().is_none()).then(|| bind.sel_context().as_str()),
            no_copy: bind.no_copy(),
            propagation_mode: (!bind.propagation_mode().is_default())
                .then(|| bind.propagation_mode().as_str()),
        }
    }
}

pub fn handle(specs: &[String], json: bool) -> Result<()> {
    let binds = specs
        .iter()
        .map(|spec| Bind::parse(spec))
        .collect::<Result<Vec<_>, _>>()?;

    if json {
        let views: Vec<BindView> = binds.iter().map(BindView::from).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        for bind in &binds {
            super::print_bind(bind);
        }
    }

    Ok(())
}
