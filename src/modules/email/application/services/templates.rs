//! HTML bodies for outgoing mail. Every user-supplied value is escaped before
//! it is placed into markup; subjects are plain text and left as-is.

use crate::auth::application::domain::otp::OTP_TTL_MINUTES;
use crate::auth::application::domain::reset_token::RESET_TOKEN_TTL_HOURS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
}

pub fn escape_html(input: &str) -> String {
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

fn layout(heading: &str, inner: &str, blog_name: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
<h2 style="color: #333;">{heading}</h2>
{inner}
<p style="color: #999; font-size: 12px;">Sent by {blog}</p>
</div>"#,
        heading = heading,
        inner = inner,
        blog = escape_html(blog_name),
    )
}

fn button(url: &str, label: &str) -> String {
    format!(
        r#"<p><a href="{url}" style="background-color: #007bff; color: #fff; padding: 10px 20px; text-decoration: none; border-radius: 4px;">{label}</a></p>"#,
        url = escape_html(url),
        label = label,
    )
}

pub fn otp_email(blog_name: &str, name: &str, otp: &str) -> EmailContent {
    let inner = format!(
        r#"<p>Hi {name},</p>
<p>Use this code to verify your email address:</p>
<p style="font-size: 28px; font-weight: bold; letter-spacing: 6px;">{otp}</p>
<p>The code expires in {ttl} minutes. If you did not sign up, ignore this message.</p>"#,
        name = escape_html(name),
        otp = escape_html(otp),
        ttl = OTP_TTL_MINUTES,
    );
    EmailContent {
        subject: "Verify Your Email - OTP".to_string(),
        html: layout("Email Verification", &inner, blog_name),
    }
}

pub fn welcome_email(blog_name: &str, frontend_url: &str, name: &str) -> EmailContent {
    let inner = format!(
        r#"<p>Hi {name},</p>
<p>Your email is verified and your account is ready. You can now write posts, comment and like what others share.</p>
{button}
<p>Happy blogging!</p>"#,
        name = escape_html(name),
        button = button(frontend_url, "Start writing"),
    );
    EmailContent {
        subject: format!("Welcome to {}!", blog_name),
        html: layout(&format!("Welcome to {}!", escape_html(blog_name)), &inner, blog_name),
    }
}

pub fn password_reset_email(blog_name: &str, name: &str, reset_link: &str) -> EmailContent {
    let inner = format!(
        r#"<p>Hi {name},</p>
<p>We received a request to reset your password.</p>
{button}
<p style="word-break: break-all; font-family: monospace; font-size: 12px;">{link}</p>
<p>The link expires in {ttl} hour. If you did not ask for a reset, ignore this message.</p>"#,
        name = escape_html(name),
        button = button(reset_link, "Reset password"),
        link = escape_html(reset_link),
        ttl = RESET_TOKEN_TTL_HOURS,
    );
    EmailContent {
        subject: "Reset Your Password".to_string(),
        html: layout("Reset Your Password", &inner, blog_name),
    }
}

pub fn like_notification(
    blog_name: &str,
    owner_name: &str,
    liker_name: &str,
    post_title: &str,
    post_url: &str,
) -> EmailContent {
    let inner = format!(
        r#"<p>Hi {owner},</p>
<p><strong>{liker}</strong> liked your post "<strong>{title}</strong>".</p>
{button}"#,
        owner = escape_html(owner_name),
        liker = escape_html(liker_name),
        title = escape_html(post_title),
        button = button(post_url, "View post"),
    );
    EmailContent {
        subject: format!("{} liked your post: {}", liker_name, post_title),
        html: layout("Someone liked your post", &inner, blog_name),
    }
}

pub fn comment_notification(
    blog_name: &str,
    owner_name: &str,
    commenter_name: &str,
    post_title: &str,
    comment: &str,
    post_url: &str,
) -> EmailContent {
    let inner = format!(
        r#"<p>Hi {owner},</p>
<p><strong>{commenter}</strong> commented on your post "<strong>{title}</strong>":</p>
<blockquote style="border-left: 4px solid #007bff; margin: 0; padding: 10px 15px; background: #f8f9fa;">{comment}</blockquote>
{button}"#,
        owner = escape_html(owner_name),
        commenter = escape_html(commenter_name),
        title = escape_html(post_title),
        comment = escape_html(comment),
        button = button(post_url, "View comment"),
    );
    EmailContent {
        subject: format!("New comment on your post: {}", post_title),
        html: layout("New comment on your post", &inner, blog_name),
    }
}
