pub mod f64;
pub mod io;
pub mod raster;
pub mod traits;
pub mod u8;

pub use self::f64::ImageF64;
pub use self::raster::RasterView;
pub use self::traits::{ImageView, Rows};
pub use self::u8::ImageU8;
