
pub use app::make_test_app;
pub use multipart::MultipartBody;
