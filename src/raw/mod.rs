mod arena;
mod balance;
mod handle;
mod node;
mod raw_scapegoat_tree;
mod rebuild;

pub(crate) use raw_scapegoat_tree::RawScapegoatTree;
