pub mod games_mem;

pub use games_mem::InMemoryGames;
