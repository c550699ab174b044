/// Port scan domain - compose documents, ports and the analyses run over them
///
/// Nothing in here touches the file system or the console.
pub mod domain;
pub mod services;
