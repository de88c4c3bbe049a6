use slimurl::{Location, LocationError, NoLocation, parse_url, parse_url_with};

fn main() {
    // Snapshot of the page the telemetry was collected on
    let page = Location::from(&parse_url("https://shop.example/cart"));

    let url = parse_url_with("api/orders?id=7", &page);
    println!("Relative on page: {}", url.href()); // https://shop.example/api/orders?id=7
    println!("Origin: {}", url.origin()); // https://shop.example

    // Headless: nothing to inherit
    let url = parse_url_with("api/orders?id=7", &NoLocation);
    println!("Relative headless: {}", url.href()); // ///api/orders?id=7
    println!("Origin: {}", url.origin()); // null

    // A provider that fails behaves like no location at all
    let failing = || -> Result<Option<Location>, LocationError> { Err(LocationError::AccessDenied) };
    let url = parse_url_with("//cdn.example/app.js", &failing);
    println!("Protocol-relative, failing provider: {}", url.href()); // //cdn.example/app.js
}
