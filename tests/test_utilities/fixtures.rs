//! Response bodies modelled on the live registry and advisory services

/// Path of the Newtonsoft.Json 13.0.1 catalog entry below the mock server root
pub const NEWTONSOFT_CATALOG_PATH: &str =
    "/catalog0/data/2021.03.22.20.10.07/newtonsoft.json.13.0.1.json";

/// Registration leaf pointing at `catalog_url`
pub fn registration_leaf(registration_url: &str, catalog_url: &str) -> String {
    format!(
        r#"{{
  "@id": "{registration_url}",
  "@type": ["Package", "http://schema.nuget.org/catalog#Permalink"],
  "catalogEntry": "{catalog_url}",
  "listed": true,
  "packageContent": "https://api.nuget.org/v3-flatcontainer/newtonsoft.json/13.0.1/newtonsoft.json.13.0.1.nupkg",
  "published": "2021-03-22T20:10:07.353+00:00"
}}"#
    )
}

/// Catalog entry of Newtonsoft.Json 13.0.1, served at `catalog_url`
pub fn newtonsoft_catalog_entry(catalog_url: &str) -> String {
    format!(
        r#"{{
  "@id": "{catalog_url}",
  "@type": ["PackageDetails", "catalog:Permalink"],
  "authors": "James Newton-King",
  "catalog:commitTimeStamp": "2021-03-22T20:12:46.1067862Z",
  "copyright": "Copyright © James Newton-King 2008",
  "created": "2021-03-22T20:10:07.353Z",
  "description": "Json.NET is a popular high-performance JSON framework for .NET",
  "iconUrl": "https://api.nuget.org/v3-flatcontainer/newtonsoft.json/13.0.1/icon",
  "id": "Newtonsoft.Json",
  "isPrerelease": false,
  "lastEdited": "2021-03-22T20:12:46.107Z",
  "licenseUrl": "https://licenses.nuget.org/MIT",
  "packageHash": "ppPFpBcvxdsfUonNcvITKqLl3bqxWbDCZIzDWHzjpdAHRFfZe0Dw9HmA0+za13IdyrgJwpkDTDA9fHaxOrt20A==",
  "packageHashAlgorithm": "SHA512",
  "packageSize": 2065020,
  "projectUrl": "https://www.newtonsoft.com/json",
  "published": "2021-03-22T20:10:07.353Z",
  "requireLicenseAcceptance": false,
  "serviceable": true,
  "verbatimVersion": "13.0.1",
  "version": "13.0.1",
  "tags": ["json"]
}}"#
    )
}

/// The standard report expected for the Newtonsoft.Json catalog entry
pub fn newtonsoft_standard_report(catalog_url: &str, vulnerabilities: &str) -> String {
    format!(
        "Package: Newtonsoft.Json@13.0.1
Id: {catalog_url}
Authors: James Newton-King
Copyright: Copyright © James Newton-King 2008
Created: 2021-03-22T20:10:07.353+00:00
Version: 13.0.1
LastEdited: 2021-03-22T20:12:46.107+00:00
LicenseUrl: https://licenses.nuget.org/MIT
Deprecation: N/A
{vulnerabilities}"
    )
}

pub const EMPTY_COMPONENT_REPORT: &str = r#"{
  "coordinates": "pkg:nuget/Newtonsoft.Json@13.0.1",
  "description": "Json.NET is a popular high-performance JSON framework for .NET",
  "reference": "https://ossindex.sonatype.org/component/pkg:nuget/Newtonsoft.Json@13.0.1",
  "vulnerabilities": []
}"#;

pub const TWO_VULNERABILITY_REPORT: &str = r#"{
  "coordinates": "pkg:npm/lodash@4.17.15",
  "vulnerabilities": [
    {
      "id": "CVE-2020-8203",
      "title": "[CVE-2020-8203] Prototype Pollution",
      "description": "Prototype pollution attack when using _.zipObjectDeep in lodash before 4.17.20.",
      "cvssScore": 7.4,
      "reference": "https://ossindex.sonatype.org/vulnerability/CVE-2020-8203"
    },
    {
      "id": "CVE-2021-23337",
      "title": "[CVE-2021-23337] Command Injection"
    }
  ]
}"#;
