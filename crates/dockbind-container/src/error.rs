use dockbind_core::BindError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error(
        "{0}\n\nヒント:\n  • <host>:<container>[:<flags>] の形式で指定してください\n  • flags には rw/ro, z/Z, nocopy, shared/slave/private を ',' 区切りで指定できます"
    )]
    InvalidBind(#[from] BindError),
}

pub type Result<T> = std::result::Result<T, ContainerError>;
