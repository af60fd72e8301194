mod contact_test;
mod helpers;
mod http_test;
mod profile_test;
mod repository_test;
mod schema_test;
