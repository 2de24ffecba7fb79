pub mod gateway;
pub mod kv;

pub use gateway::{load_state, save_state, LoadedState, PROJECTS_KEY, TODOS_KEY};
pub use kv::{
    atomic_write, ensure_data_dir, get_data_dir, init_local_dir, store_file, KvStore,
};
