mod login;
mod public;

pub use login::LoginPage;
pub use public::{
    AboutPage, ContactPage, HomePage, NotFoundPage, ProjectsPage, PublicShell, ServicesPage,
};
