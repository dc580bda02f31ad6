use url::form_urlencoded;

/// `application/x-www-form-urlencoded` body for `params`, keeping their order.
pub fn encode_form_body(params: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}
