use devour_core::{
    extract, AppError, Decoration, ExtractionConfig, ParamType, RequestMethod, TemplateRenderer,
};
use pretty_assertions::assert_eq;

const REMOTE_API: &str = r#"<!DOCTYPE html>
<html>
<head><title>Docker Remote API v1.17</title></head>
<body>
<div class="span3 sidebar"><h3>Contents</h3></div>
<div class="span9 content-body">
  <h1>Docker Remote API v1.17</h1>
  <h2>2.1 Containers</h2>

  <h3>List containers</h3>
  <p><code>GET /containers/json</code></p>
  <p>List containers</p>
  <p>Query Parameters:</p>
  <ul>
    <li><strong>all</strong> – 1/True/true or 0/False/false, Show all containers.</li>
    <li><strong>limit</strong> – Show <code>limit</code> last created containers.</li>
    <li><strong>filters</strong> - a JSON encoded value of the filters to process:</li>
    <li>exited=&lt;int&gt;</li>
    <li>status=running</li>
  </ul>
  <p>Status Codes:</p>
  <ul>
    <li><strong>200</strong> – no error</li>
    <li><strong>400</strong> – bad parameter</li>
    <li><strong>500</strong> – server error</li>
  </ul>

  <h3>Create a container</h3>
  <p><code>POST /containers/create</code></p>
  <p>Json Parameters:</p>
  <ul>
    <li><strong>Hostname</strong> - A string value containing the desired hostname.</li>
    <li><strong>Cmd</strong> - Command to run specified as a string or an array of strings.</li>
    <li>HostConfig</li>
  </ul>
  <p>Query Parameters:</p>
  <ul>
    <li><strong>name</strong> – Assign the specified name to the container.</li>
  </ul>
  <p>Status Codes:</p>
  <ul>
    <li><strong>201</strong> – no error</li>
    <li><strong>404</strong> – no such container</li>
  </ul>

  <h3>Start a container</h3>
  <p><code>POST /containers/(id)/start</code></p>

  <h3>Kill a container</h3>
  <p><code>POST /containers/(id)/kill</code></p>
  <p>Status Codes:</p>
  <ul>
    <li><strong>204</strong> – no error</li>
    <li><p>500 – server error</p></li>
    <li>404 – not found</li>
  </ul>

  <h3>Image tarball format</h3>
  <p>An image tarball contains one directory per image layer.</p>

  <h3>Tag an image into a repository</h3>
  <p><code>POST /images/(name)/tag</code></p>
  <p>Query Parameters:</p>
  <ul>
    <li><strong>repo</strong> – The repository to tag in</li>
    <li><strong>force</strong> – 1/True/true or 0/False/false, default false</li>
  </ul>

  <h3>Build image from a Dockerfile</h3>
  <p><code>POST /build</code></p>
  <p>Query Parameters:</p>
  <ul>
    <li><strong>t</strong> – repository name (and optionally a tag)</li>
  </ul>
  <p>Request Headers:</p>
  <ul>
    <li><strong>Content-type</strong> – should be set to "application/tar".</li>
  </ul>
</div>
</body>
</html>
"#;

fn names(params: impl Iterator<Item = String>) -> Vec<String> {
    params.collect()
}

#[test]
fn test_endpoint_list_in_document_order() {
    let extraction = extract(REMOTE_API, &ExtractionConfig::default()).unwrap();

    let descriptions: Vec<_> = extraction
        .requests
        .iter()
        .map(|r| r.description().to_string())
        .collect();

    assert_eq!(
        descriptions,
        vec![
            "List containers",
            "Create a container",
            "Start a container",
            "Kill a container",
            "Tag an image into a repository",
            "Build image from a Dockerfile",
        ]
    );
    assert_eq!(extraction.content_digest.len(), 64);
}

#[test]
fn test_query_filters_and_status() {
    let extraction = extract(REMOTE_API, &ExtractionConfig::default()).unwrap();
    let list = &extraction.requests[0];

    assert_eq!(list.method(), RequestMethod::Get);
    assert_eq!(
        names(list.params_by_type(ParamType::Query).map(|p| p.name.clone())),
        vec!["all", "limit", "filters"]
    );

    let filters: Vec<_> = list
        .params_by_type(ParamType::QueryFilter)
        .map(|p| (p.name.as_str(), p.description.as_str()))
        .collect();
    assert_eq!(filters, vec![("exited", "<int>"), ("status", "running")]);

    assert_eq!(
        names(list.status_codes().iter().map(|p| p.name.clone())),
        vec!["200", "400", "500"]
    );
}

#[test]
fn test_json_body_on_allow_listed_endpoint() {
    let extraction = extract(REMOTE_API, &ExtractionConfig::default()).unwrap();
    let create = &extraction.requests[1];

    let json: Vec<_> = create.params_by_type(ParamType::Json).collect();
    assert_eq!(json.len(), 3);
    assert_eq!(json[0].name, "Hostname");
    assert_eq!(json[2].name, "HostConfig");
    assert_eq!(json[2].description, "");

    // JSON items come first, then query, then status
    let order: Vec<_> = create.params().iter().map(|p| p.ty).collect();
    assert_eq!(
        order,
        vec![
            ParamType::Json,
            ParamType::Json,
            ParamType::Json,
            ParamType::Query,
            ParamType::Status,
            ParamType::Status,
        ]
    );
}

#[test]
fn test_sections_do_not_leak_into_earlier_headings() {
    let extraction = extract(REMOTE_API, &ExtractionConfig::default()).unwrap();
    let start = &extraction.requests[2];

    // "Kill a container" has status codes right after, they are not ours
    assert!(start.params().is_empty());
    assert!(start.status_codes().is_empty());

    let extent = start.rest_var_extents()[0];
    assert_eq!(extent.name_in(start.query()), "id");
}

#[test]
fn test_status_fallback_item_ends_the_list() {
    let extraction = extract(REMOTE_API, &ExtractionConfig::default()).unwrap();
    let kill = &extraction.requests[3];

    let codes: Vec<_> = kill
        .status_codes()
        .iter()
        .map(|p| (p.name.as_str(), p.description.as_str()))
        .collect();
    assert_eq!(codes, vec![("204", "no error"), ("500", "server error")]);
}

#[test]
fn test_header_detection() {
    let extraction = extract(REMOTE_API, &ExtractionConfig::default()).unwrap();
    let build = &extraction.requests[5];

    // "Request Headers:" is not a recognized section
    assert_eq!(build.params().len(), 1);
    assert_eq!(build.params()[0].name, "t");

    let config = ExtractionConfig {
        query_heading: r"^(Query Parameters?|Request Headers)".to_string(),
        ..ExtractionConfig::default()
    };
    let extraction = extract(REMOTE_API, &config).unwrap();
    let build = &extraction.requests[5];

    // Only the first matching paragraph is used
    assert_eq!(build.params().len(), 1);
}

#[test]
fn test_templated_output_is_stable() {
    let extraction = extract(REMOTE_API, &ExtractionConfig::default()).unwrap();
    let renderer = TemplateRenderer::new(
        "$REQUEST_TYPE $REQUEST_URL $REQUEST_SUB [$REQUEST_GET_PARAMETERS] [$REQUEST_FILTERS]",
        Decoration::default(),
    );

    let first: Vec<_> = extraction.requests.iter().map(|r| renderer.render(r)).collect();
    let second: Vec<_> = extraction.requests.iter().map(|r| renderer.render(r)).collect();
    assert_eq!(first, second);

    assert_eq!(
        first[0],
        "'GET' '/containers/json' [] ['all', 'limit', 'filters'] ['exited', 'status']"
    );
    assert_eq!(first[4], "'POST' '/images/(name)/tag' [(8, 14)] ['repo', 'force'] []");
}

#[test]
fn test_missing_content_body() {
    let err = extract("<html><body><h3>x</h3></body></html>", &ExtractionConfig::default())
        .unwrap_err();
    assert!(matches!(err, AppError::ContentNotFound(_)));
}
