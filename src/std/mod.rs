mod btree_map;
mod slice;
mod string;
mod vec;
