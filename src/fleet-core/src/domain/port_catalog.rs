use crate::Coordinates;

/// A well-known port used to resolve names and positions of shipment port codes.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPort {
    /// UN/LOCODE of the port.
    pub code: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub region: &'static str,
    pub position: Coordinates,
}

const fn port(
    code: &'static str,
    name: &'static str,
    country: &'static str,
    region: &'static str,
    longitude: f64,
    latitude: f64,
) -> CatalogPort {
    CatalogPort {
        code,
        name,
        country,
        region,
        position: Coordinates::new(longitude, latitude),
    }
}

pub static PORT_CATALOG: &[CatalogPort] = &[
    port("CNSHA", "Shanghai", "China", "Asia-Pacific", 121.5, 31.2),
    port("SGSIN", "Singapore", "Singapore", "Asia-Pacific", 103.8, 1.35),
    port("NLRTM", "Rotterdam", "Netherlands", "Europe", 4.5, 51.9),
    port("USLAX", "Los Angeles", "United States", "North America", -118.2, 33.7),
    port("DEHAM", "Hamburg", "Germany", "Europe", 10.0, 53.5),
    port("BEANR", "Antwerp", "Belgium", "Europe", 4.4, 51.3),
    port("KRPUS", "Busan", "South Korea", "Asia-Pacific", 129.0, 35.1),
    port("AEDXB", "Dubai", "UAE", "Middle East", 55.3, 25.2),
    port("HKHKG", "Hong Kong", "Hong Kong", "Asia-Pacific", 114.2, 22.3),
    port("USNYC", "New York", "United States", "North America", -74.0, 40.7),
    port("GBFXT", "Felixstowe", "United Kingdom", "Europe", 1.3, 51.9),
    port("USLGB", "Long Beach", "United States", "North America", -118.2, 33.8),
    port("CNYTN", "Yantian", "China", "Asia-Pacific", 114.2, 22.5),
    port("GBSOU", "Southampton", "United Kingdom", "Europe", -1.4, 50.9),
];

/// Case-insensitive lookup by port code.
pub fn find_port(code: &str) -> Option<&'static CatalogPort> {
    let code = code.trim();
    PORT_CATALOG
        .iter()
        .find(|p| p.code.eq_ignore_ascii_case(code))
}
