pub struct RenderedEmail {
    pub subject: String,
    pub html_body: String,
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn verification(name: &str, link: &str) -> RenderedEmail {
    RenderedEmail {
        subject: "Verify your email address".to_string(),
        html_body: format!(
            "<p>Hi {name},</p>\
             <p>Welcome to the wedding marketplace. Please confirm your email address:</p>\
             <p><a href=\"{link}\">Verify email</a></p>\
             <p>If you did not create an account, you can ignore this message.</p>",
            name = escape(name),
            link = escape(link),
        ),
    }
}

pub fn vendor_approved(business_name: &str) -> RenderedEmail {
    RenderedEmail {
        subject: "Your vendor profile has been approved".to_string(),
        html_body: format!(
            "<p>Congratulations!</p>\
             <p>Your business <strong>{}</strong> is now live on the marketplace \
             and visible to couples planning their wedding.</p>",
            escape(business_name)
        ),
    }
}

pub fn vendor_rejected(business_name: &str, reason: Option<&str>) -> RenderedEmail {
    let reason = reason
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(|r| format!("<p>Reason: {}</p>", escape(r)))
        .unwrap_or_default();

    RenderedEmail {
        subject: "Update on your vendor application".to_string(),
        html_body: format!(
            "<p>We reviewed the profile for <strong>{}</strong> and could not approve it yet.</p>\
             {}\
             <p>You can update your profile and it will be reviewed again.</p>",
            escape(business_name),
            reason
        ),
    }
}
