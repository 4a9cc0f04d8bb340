pub mod my_assets;
