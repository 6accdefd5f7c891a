//! HTML 视图，模板位于 `templates/`

use askama::Template;

use super::model::{ErrorViewModel, HomeViewModel, InstanceInfoViewModel, ProductViewModel};

pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub show_instance: bool,
    pub instance_error: &'a str,
    pub instance_rows: Vec<DetailRow>,
    pub show_products: bool,
    pub products_error: &'a str,
    pub products: &'a [ProductViewModel],
}

impl<'a> IndexTemplate<'a> {
    pub fn new(view_model: &'a HomeViewModel) -> Self {
        let instance = view_model.instance_info.as_ref();
        let instance_error = instance
            .filter(|info| info.has_error())
            .and_then(|info| info.error_message.as_deref())
            .unwrap_or_default();
        let products_error = if view_model.has_products_error() {
            view_model.products_error_message.as_deref().unwrap_or_default()
        } else {
            ""
        };

        Self {
            show_instance: instance.is_some(),
            instance_error,
            instance_rows: instance.map(instance_rows).unwrap_or_default(),
            show_products: view_model.products.is_some(),
            products_error,
            products: view_model.products.as_deref().unwrap_or_default(),
        }
    }
}

fn instance_rows(instance: &InstanceInfoViewModel) -> Vec<DetailRow> {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    vec![
        DetailRow {
            label: "实例 ID",
            value: text(&instance.instance_id),
        },
        DetailRow {
            label: "主机名",
            value: text(&instance.hostname),
        },
        DetailRow {
            label: "启动时间 (UTC)",
            value: instance
                .startup_time
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
        },
        DetailRow {
            label: "运行时长",
            value: text(&instance.uptime),
        },
    ]
}

#[derive(Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub show_request_id: bool,
    pub request_id: &'a str,
}

impl<'a> ErrorTemplate<'a> {
    pub fn new(view_model: &'a ErrorViewModel) -> Self {
        Self {
            show_request_id: view_model.show_request_id(),
            request_id: view_model.request_id.as_deref().unwrap_or_default(),
        }
    }
}

pub fn render_index(view_model: &HomeViewModel) -> askama::Result<String> {
    IndexTemplate::new(view_model).render()
}

pub fn render_privacy() -> askama::Result<String> {
    PrivacyTemplate.render()
}

pub fn render_error(view_model: &ErrorViewModel) -> askama::Result<String> {
    ErrorTemplate::new(view_model).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_index_has_both_actions_and_no_data() {
        let html = render_index(&HomeViewModel::default()).unwrap();
        assert!(html.contains("call-instance-api"));
        assert!(html.contains("call-products-api"));
        assert!(!html.contains("<table>"));
        assert!(!html.contains("<dl>"));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn products_error_replaces_the_table() {
        let vm = HomeViewModel {
            products: Some(Vec::new()),
            products_error_message: Some("HTTP 错误! 状态码: 503 Service Unavailable".into()),
            ..HomeViewModel::default()
        };
        let html = render_index(&vm).unwrap();
        assert!(html.contains("503 Service Unavailable"));
        assert!(!html.contains("<table>"));
        assert!(!html.contains("暂无产品"));
    }

    #[test]
    fn empty_catalog_says_so() {
        let vm = HomeViewModel {
            products: Some(Vec::new()),
            ..HomeViewModel::default()
        };
        let html = render_index(&vm).unwrap();
        assert!(html.contains("暂无产品"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn products_render_with_exact_prices() {
        let vm = HomeViewModel {
            products: Some(vec![ProductViewModel {
                id: 3,
                name: "Headphones".into(),
                description: "Wireless noise-cancelling headphones".into(),
                price: dec!(249.99),
            }]),
            ..HomeViewModel::default()
        };
        let html = render_index(&vm).unwrap();
        assert!(html.contains("<td>Headphones</td>"));
        assert!(html.contains("<td>249.99</td>"));
    }

    #[test]
    fn instance_error_is_shown_in_its_section() {
        let vm = HomeViewModel {
            instance_info: Some(InstanceInfoViewModel::with_error("调用 API 出错: refused")),
            ..HomeViewModel::default()
        };
        let html = render_index(&vm).unwrap();
        assert!(html.contains("调用 API 出错: refused"));
        assert!(!html.contains("<dl>"));
    }

    #[test]
    fn instance_details_are_listed() {
        let vm = HomeViewModel {
            instance_info: Some(InstanceInfoViewModel {
                instance_id: Some("ab12cd34".into()),
                hostname: Some("node-1".into()),
                uptime: Some("00:01:05".into()),
                ..InstanceInfoViewModel::default()
            }),
            ..HomeViewModel::default()
        };
        let html = render_index(&vm).unwrap();
        assert!(html.contains("<dd>ab12cd34</dd>"));
        assert!(html.contains("<dd>node-1</dd>"));
        assert!(html.contains("<dd>00:01:05</dd>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let vm = HomeViewModel {
            products: Some(vec![ProductViewModel {
                id: 1,
                name: "<b>\"a\" & b".into(),
                ..ProductViewModel::default()
            }]),
            ..HomeViewModel::default()
        };
        let html = render_index(&vm).unwrap();
        assert!(html.contains("&lt;b&gt;&quot;a&quot; &amp; b"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn privacy_page_uses_the_layout() {
        let html = render_privacy().unwrap();
        assert!(html.contains("<title>隐私政策 - shopfront</title>"));
        assert!(html.contains("<nav>"));
    }

    #[test]
    fn error_page_shows_request_id_only_when_present() {
        let with_id = render_error(&ErrorViewModel {
            request_id: Some("req-1".into()),
        })
        .unwrap();
        assert!(with_id.contains("<code>req-1</code>"));

        let without_id = render_error(&ErrorViewModel::default()).unwrap();
        assert!(!without_id.contains("Request ID"));
    }
}
