#![deny(missing_docs)]

//! Per-category view of a request, the shape generated code consumes.

use crate::model::param::{Param, ParamType};
use crate::model::request::{RequestMethod, RequestModel, RestVarExtent};
use serde::Serialize;

/// A request with its parameters grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiRequest {
    /// Endpoint heading text.
    pub desc: String,
    /// HTTP method.
    #[serde(rename = "type")]
    pub method: RequestMethod,
    /// URL template.
    pub url: String,
    /// Placeholder spans in `url`.
    pub url_sub: Vec<RestVarExtent>,
    /// Query parameters.
    pub get_params: Vec<Param>,
    /// Filter key/value pairs.
    pub filters: Vec<Param>,
    /// JSON body fields.
    pub json: Vec<Param>,
    /// Status codes.
    pub status: Vec<Param>,
    /// Header-like parameters.
    pub headers: Vec<Param>,
}

impl ApiRequest {
    /// Parameters of one category.
    pub fn group(&self, ty: ParamType) -> &[Param] {
        match ty {
            ParamType::Query => &self.get_params,
            ParamType::QueryFilter => &self.filters,
            ParamType::Json => &self.json,
            ParamType::Status => &self.status,
            ParamType::Header => &self.headers,
            ParamType::Invalid => &[],
        }
    }
}

impl From<&RequestModel> for ApiRequest {
    fn from(model: &RequestModel) -> Self {
        let collect = |ty| model.params_by_type(ty).cloned().collect::<Vec<_>>();

        Self {
            desc: model.description().to_string(),
            method: model.method(),
            url: model.query().to_string(),
            url_sub: model.rest_var_extents().to_vec(),
            get_params: collect(ParamType::Query),
            filters: collect(ParamType::QueryFilter),
            json: collect(ParamType::Json),
            status: collect(ParamType::Status),
            headers: collect(ParamType::Header),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_keeps_document_order() {
        let mut model = RequestModel::new("List containers");
        model.set_method("GET");
        model.set_query("/containers/json");
        model.add_raw_param("all – Show all", ParamType::Query);
        model.add_raw_param("X-Registry-Auth – credentials", ParamType::Header);
        model.add_raw_param("limit – Show limit", ParamType::Query);
        model.add_raw_param("status=exited", ParamType::QueryFilter);
        model.add_raw_param("200 – no error", ParamType::Status);

        let request = ApiRequest::from(&model);

        let names: Vec<_> = request.get_params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["all", "limit"]);
        assert_eq!(request.headers[0].name, "X-Registry-Auth");
        assert_eq!(request.filters[0].description, "exited");
        assert_eq!(request.group(ParamType::Status).len(), 1);
        assert!(request.group(ParamType::Invalid).is_empty());
        assert_eq!(request.method, RequestMethod::Get);
    }

    #[test]
    fn test_serializes_method_as_type() {
        let mut model = RequestModel::new("Remove a container");
        model.set_method("DELETE");
        model.set_query("/containers/(id)");

        let json = serde_json::to_value(ApiRequest::from(&model)).unwrap();
        assert_eq!(json["type"], "DELETE");
        assert_eq!(json["url_sub"][0]["start"], 12);
        assert_eq!(json["url_sub"][0]["end"], 16);
    }
}
