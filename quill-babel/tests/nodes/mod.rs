mod paste;
mod tree;
