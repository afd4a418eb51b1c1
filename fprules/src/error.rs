use crate::fp::tree::Item;
use thiserror::Error;

/// Contract violations raised by the FP-tree and the miners.
///
/// Every variant aborts the enclosing mining call; nothing in the core retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MiningError {
    #[error("item {0} is not present in the header table")]
    UnknownItem(Item),
    #[error("cannot remove item {item}: an occurrence still has {children} children")]
    NotALeaf { item: Item, children: usize },
    #[error("support of an empty itemset is undefined")]
    EmptyItemset,
    #[error("no item occurs exclusively at leaf positions")]
    NoLeafItem,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("minimum support ratio {0} is outside [0, 1]")]
    SupportRatio(f64),
    #[error("minimum confidence {0} is outside [0, 1]")]
    Confidence(f64),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read transactions: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid item identifier {value:?}")]
    InvalidItem { line: usize, value: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Mining(#[from] MiningError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
