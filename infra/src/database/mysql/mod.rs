//! MySQL repository implementations

pub mod account_repository_impl;
pub mod admin_repository_impl;
pub mod favorite_repository_impl;
pub mod profile_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use admin_repository_impl::MySqlAdminRepository;
pub use favorite_repository_impl::MySqlFavoriteRepository;
pub use profile_repository_impl::MySqlProfileRepository;
