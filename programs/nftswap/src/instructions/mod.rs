pub mod accept_pair_authority;
pub mod buy_nft;
pub mod close_pair;
pub mod deposit_nft;
pub mod deposit_quote;
pub mod get_swap_quote;
pub mod initialize_pair;
pub mod initialize_pair_authority;
pub mod sell_nft;
pub mod set_delta;
pub mod set_fee;
pub mod set_pair_authority_fee;
pub mod set_spot_price;
pub mod transfer_pair_authority;
pub mod withdraw_fees;
pub mod withdraw_nft;
pub mod withdraw_quote;

pub use accept_pair_authority::*;
pub use buy_nft::*;
pub use close_pair::*;
pub use deposit_nft::*;
pub use deposit_quote::*;
pub use get_swap_quote::*;
pub use initialize_pair::*;
pub use initialize_pair_authority::*;
pub use sell_nft::*;
pub use set_delta::*;
pub use set_fee::*;
pub use set_pair_authority_fee::*;
pub use set_spot_price::*;
pub use transfer_pair_authority::*;
pub use withdraw_fees::*;
pub use withdraw_nft::*;
pub use withdraw_quote::*;
