pub mod application {
    pub mod product {
        pub mod catalog_cache;
        pub mod count;
        pub mod create;
        pub mod delete_by_id;
        pub mod delete_by_name;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_by_name;
        pub mod get_by_page;
        pub mod get_by_page_and_category;
        pub mod get_categories;
        pub mod telemetry;
        pub mod update;
        pub mod update_quantity;
        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod cache;
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod cache_keys;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod count;
            pub mod create;
            pub mod delete_by_id;
            pub mod delete_by_name;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_by_name;
            pub mod get_by_page;
            pub mod get_by_page_and_category;
            pub mod get_categories;
            pub mod update;
            pub mod update_quantity;
        }
    }
}
