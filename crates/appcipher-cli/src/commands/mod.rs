mod crypt;
mod init;
mod key;
mod misc;

pub use crypt::{handle_decrypt, handle_encrypt, handle_encrypt_map};
pub use init::handle_init;
pub use key::{handle_key_remove, handle_key_set, handle_key_status};
pub use misc::handle_completions;
