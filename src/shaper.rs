use crate::errors::ProxyError;
use crate::models::{Content, GeminiPayload, InlineData, Part, ProxyRequest};

// Validate the inbound request and build the upstream contents/parts payload.
// Text part always comes first - some models care about part order.
pub fn shape_request(req: &ProxyRequest) -> Result<GeminiPayload, ProxyError> {
    if req.prompt.is_empty() {
        return Err(ProxyError::Validation(
            "prompt must be a non-empty string".to_string(),
        ));
    }

    let mut parts = vec![Part::Text {
        text: req.prompt.clone(),
    }];

    if let Some(image) = req.image.as_deref().filter(|s| !s.is_empty()) {
        // strip the data URI prefix: "data:<mime>;base64,<payload>"
        let data = match image.split_once(',') {
            Some((_, payload)) => payload,
            None => {
                return Err(ProxyError::Validation(
                    "image must be a base64 data URI".to_string(),
                ));
            }
        };
        if !data.is_empty() {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: "image/jpeg".to_string(),
                    data: data.to_string(),
                },
            });
        }
    }

    Ok(GeminiPayload {
        contents: vec![Content { parts }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str, image: Option<&str>) -> ProxyRequest {
        ProxyRequest {
            prompt: prompt.to_string(),
            model: None,
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn text_only_prompt_yields_a_single_text_part() {
        let payload = shape_request(&request("hello", None)).unwrap();
        assert_eq!(payload.contents.len(), 1);
        assert_eq!(
            payload.contents[0].parts,
            vec![Part::Text {
                text: "hello".to_string()
            }]
        );
    }

    #[test]
    fn image_becomes_inline_data_after_text() {
        let payload =
            shape_request(&request("hi", Some("data:image/jpeg;base64,QQ=="))).unwrap();
        assert_eq!(
            payload.contents[0].parts,
            vec![
                Part::Text {
                    text: "hi".to_string()
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: "image/jpeg".to_string(),
                        data: "QQ==".to_string(),
                    }
                },
            ]
        );
    }

    #[test]
    fn mime_type_is_fixed_regardless_of_declared_type() {
        let payload =
            shape_request(&request("hi", Some("data:image/png;base64,AAAA"))).unwrap();
        match &payload.contents[0].parts[1] {
            Part::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "image/jpeg");
                assert_eq!(inline_data.data, "AAAA");
            }
            other => panic!("expected inline data part, got {other:?}"),
        }
    }

    #[test]
    fn empty_prompt_is_a_validation_error() {
        for req in [request("", None), request("", Some("data:image/jpeg;base64,QQ=="))] {
            assert!(matches!(
                shape_request(&req),
                Err(ProxyError::Validation(_))
            ));
        }
    }

    #[test]
    fn image_without_data_uri_prefix_is_rejected() {
        assert!(matches!(
            shape_request(&request("hi", Some("QQ=="))),
            Err(ProxyError::Validation(_))
        ));
    }

    #[test]
    fn empty_image_field_is_ignored() {
        let payload = shape_request(&request("hi", Some(""))).unwrap();
        assert_eq!(payload.contents[0].parts.len(), 1);
    }

    #[test]
    fn image_empty_after_stripping_is_omitted() {
        let payload = shape_request(&request("hi", Some("data:image/jpeg;base64,"))).unwrap();
        assert_eq!(payload.contents[0].parts.len(), 1);
    }
}
