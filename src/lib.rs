pub mod domain {
    pub mod budget;
    pub mod catalog;
    pub mod consumption;
    pub mod dashboard;
    pub mod department;
    pub mod error;
    pub mod projection;
    pub mod user;
}

pub mod infrastructure {
    pub mod config;
    pub mod endpoints;
    pub mod logging;
}
