pub mod asset_transfer;
