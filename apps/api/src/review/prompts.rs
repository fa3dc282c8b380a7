// Customer review analysis prompt templates and response schema.

use crate::prompt::ResponseSchema;

const GIFT_DESCRIPTION: &str = "Was the item purchased as a gift for someone else? \
Answer True if yes, False if not or unknown.";
const DELIVERY_DAYS_DESCRIPTION: &str = "How many days did it take for the product \
to arrive? If this information is not found, output -1.";
const PRICE_VALUE_DESCRIPTION: &str = "Extract any sentences about the value or price, \
and output them as a comma-separated Python list.";

/// Free-form extraction prompt. Output format is described in prose only.
/// Replace `{text}`.
pub const REVIEW_TEMPLATE: &str = r#"
For the following text, extract the following information:

gift: Was the item purchased as a gift for someone else?
Answer True if yes, False if not or unknown.

delivery_days: How many days did it take for the product
to arrive? If this information is not found, output -1.

price_value: Extract any sentences about the value or price,
and output them as a comma-separated Python list.

Format the output as JSON with the following keys:
gift
delivery_days
price_value

text: {text}
"#;

/// Schema-guided extraction prompt. Replace `{text}` and `{format_instructions}`.
pub const REVIEW_TEMPLATE_STRUCTURED: &str = r#"For the following text, extract the following information:

gift: Was the item purchased as a gift for someone else?
Answer True if yes, False if not or unknown.

delivery_days: How many days did it take for the product to arrive? If this information is not found, output -1.

price_value: Extract any sentences about the value or price, and output them as a comma-separated Python list.

text: {text}

{format_instructions}
"#;

pub fn review_schemas() -> Vec<ResponseSchema> {
    vec![
        ResponseSchema::new("gift", GIFT_DESCRIPTION),
        ResponseSchema::new("delivery_days", DELIVERY_DAYS_DESCRIPTION),
        ResponseSchema::new("price_value", PRICE_VALUE_DESCRIPTION),
    ]
}
