pub mod petal;
