pub mod middleware_custom_header;
