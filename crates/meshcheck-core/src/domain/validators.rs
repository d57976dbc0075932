//! Per-entity field validators.
//!
//! Every function here is pure: it takes catalog values that were already
//! fetched and returns a report. Fetching (and not-found handling) belongs to
//! [`CheckerService`](crate::application::CheckerService).

use crate::domain::{
    entities::{DataProduct, DatasetView, Domain, Tag},
    naming::{is_snake_case, is_valid_domain_product_name, to_snake_case},
    report::{DatasetReport, EntityReport, FieldCheck, FieldValue, fields},
    value_objects::ValidCatalogs,
};

/// Prefix every domain schema location must start with.
pub const SCHEMA_LOCATION_PREFIX: &str = "s3://starburst/";

/// Check a domain's name, description and schema location.
pub fn check_domain(domain: &Domain) -> EntityReport {
    EntityReport::new()
        .with(
            fields::DOMAIN_NAME,
            FieldCheck::new(
                domain.name.as_str(),
                is_valid_domain_product_name(&domain.name),
            ),
        )
        .with(
            fields::DOMAIN_DESCRIPTION,
            FieldCheck::new(
                domain.description.as_str(),
                !domain.description.is_empty(),
            ),
        )
        .with(
            fields::DOMAIN_SCHEMA_LOCATION,
            FieldCheck::new(
                domain.schema_location.as_str(),
                is_valid_schema_location(&domain.schema_location, &domain.name),
            ),
        )
}

/// `true` if `location` is `s3://starburst/` followed by a path that starts
/// with the snake_case form of the domain name.
pub fn is_valid_schema_location(location: &str, domain_name: &str) -> bool {
    location
        .strip_prefix(SCHEMA_LOCATION_PREFIX)
        .is_some_and(|rest| rest.starts_with(&to_snake_case(domain_name)))
}

/// Check a data product's descriptive metadata.
///
/// `tags` are the product's catalog tags, resolved by the caller through the
/// parent domain.
pub fn check_data_product_info(
    product: &DataProduct,
    tags: &[Tag],
    valid_catalogs: &ValidCatalogs,
) -> EntityReport {
    EntityReport::new()
        .with(
            fields::DATA_PRODUCT_NAME,
            FieldCheck::new(
                product.name.as_str(),
                is_valid_domain_product_name(&product.name),
            ),
        )
        .with(
            fields::DATA_PRODUCT_SUMMARY,
            FieldCheck::new(product.summary.as_str(), !product.summary.is_empty()),
        )
        .with(
            fields::DATA_PRODUCT_CATALOG_NAME,
            FieldCheck::new(
                product.catalog_name.as_str(),
                valid_catalogs.contains(&product.catalog_name),
            ),
        )
        .with(
            fields::DATA_PRODUCT_OWNERS,
            FieldCheck::new(
                FieldValue::list_of(&product.owners),
                !product.owners.is_empty(),
            ),
        )
        .with(
            fields::DATA_PRODUCT_TAGS,
            FieldCheck::new(FieldValue::list_of(tags), !tags.is_empty()),
        )
}

/// Check one dataset view and its columns.
pub fn check_data_product_dataset(dataset: &DatasetView) -> DatasetReport {
    let columns_valid = dataset.columns.iter().all(|column| column.has_description());

    EntityReport::new()
        .with(
            fields::DATASET_NAME,
            FieldCheck::new(dataset.name.as_str(), is_snake_case(&dataset.name)),
        )
        .with(
            fields::DATASET_DESCRIPTION,
            FieldCheck::new(
                dataset.description.as_str(),
                !dataset.description.is_empty(),
            ),
        )
        .with(
            fields::DATASET_COLUMNS,
            FieldCheck::new(FieldValue::list_of(&dataset.columns), columns_valid),
        )
}

/// Check every view of a data product, in order.
///
/// Returns `None` for products backed by materialized views: their views
/// cannot be introspected, whatever the `views` list holds.
pub fn check_data_product_all_datasets(product: &DataProduct) -> Option<Vec<DatasetReport>> {
    if product.materialized_views {
        return None;
    }
    Some(
        product
            .views
            .iter()
            .map(check_data_product_dataset)
            .collect(),
    )
}
