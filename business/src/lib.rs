pub mod application {
    pub mod cart {
        pub mod add_product;
        pub mod controller;
        pub mod remove_product;
        pub mod state;
        #[cfg(test)]
        pub(crate) mod test_support;
        pub mod update_amount;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod storage;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod add_product;
            pub mod remove_product;
            pub mod update_amount;
        }
    }
    pub mod inventory {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod notification {
        pub mod model;
        pub mod services;
    }
}
