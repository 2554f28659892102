mod preference;

pub use self::preference::{PreferenceStore, storage_key};
