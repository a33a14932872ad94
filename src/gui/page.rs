use crate::gui::form::BookForm;
use crate::utils::html::escape;

// PageView is everything the shelf page shows around the display area.
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub shelf_name: &'a str,
    pub display_area: String,
    pub dialog_open: bool,
    pub form: Option<&'a BookForm>,
    pub error: Option<String>,
}

impl<'a> PageView<'a> {
    pub fn new(shelf_name: &'a str, display_area: String) -> Self {
        Self {
            shelf_name,
            display_area,
            dialog_open: false,
            form: None,
            error: None,
        }
    }

    pub fn with_dialog(mut self, open: bool) -> Self {
        self.dialog_open = open;
        self
    }

    pub fn with_form(mut self, form: Option<&'a BookForm>) -> Self {
        self.form = form;
        self
    }

    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    pub fn render(&self) -> String {
        let name = escape(self.shelf_name);
        let error = self.error.as_ref()
            .map(|e| format!(r#"<p class="error" role="alert">{}</p>"#, escape(e)))
            .unwrap_or_default();
        let open = if self.dialog_open { " open" } else { "" };
        let value = |text: Option<&str>| text
            .map(|text| format!(r#" value="{}""#, escape(text)))
            .unwrap_or_default();
        let checked = if self.form.is_some_and(|form| form.read.is_some()) { " checked" } else { "" };
        format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{name}</title>
<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined">
</head>
<body>
<header>
<h1>{name}</h1>
<form method="get" action="/books/new"><button type="submit">New book</button></form>
</header>
{error}
<main>{area}</main>
<dialog{open}>
<form method="post" action="/books">
<label>Read <input type="checkbox" name="read"{checked}></label>
<label>Cover <input type="url" name="cover"{cover}></label>
<label>Title <input type="text" name="title"{title} required></label>
<label>Author <input type="text" name="author"{author} required></label>
<label>Pages <input type="number" name="pages"{pages} required></label>
<button type="submit" name="intent" value="submit">Add</button>
<button type="submit" name="intent" value="cancel" formnovalidate>Cancel</button>
</form>
</dialog>
</body>
</html>
"#, name = name, error = error, area = self.display_area, open = open, checked = checked,
                cover = value(self.form.map(|form| form.cover.as_str())),
                title = value(self.form.map(|form| form.title.as_str())),
                author = value(self.form.map(|form| form.author.as_str())),
                pages = value(self.form.map(|form| form.pages.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use crate::gui::form::BookForm;
    use crate::gui::page::PageView;

    #[tokio::test]
    async fn test_should_render_closed_dialog() {
        let html = PageView::new("My <Shelf>", r#"<div class="books"></div>"#.to_string()).render();
        assert!(html.contains("<title>My &lt;Shelf&gt;</title>"));
        assert!(html.contains(r#"<main><div class="books"></div></main>"#));
        assert!(html.contains("<dialog>"));
        assert!(!html.contains("class=\"error\""));
    }

    #[tokio::test]
    async fn test_should_render_open_dialog_with_error() {
        let html = PageView::new("shelf", String::new())
            .with_dialog(true)
            .with_error(Some("title must not be empty".to_string()))
            .render();
        assert!(html.contains("<dialog open>"));
        assert!(html.contains("title must not be empty"));
        assert!(html.contains(r#"name="intent" value="cancel""#));
    }

    #[tokio::test]
    async fn test_should_refill_rejected_dialog() {
        let mut form = BookForm::submitted("Dune \"Messiah\"", "Herbert", "lots", true);
        form.cover = "https://covers/dune.jpg".to_string();
        let html = PageView::new("shelf", String::new())
            .with_dialog(true)
            .with_form(Some(&form))
            .render();
        assert!(html.contains(r#"name="title" value="Dune &quot;Messiah&quot;" required"#));
        assert!(html.contains(r#"name="author" value="Herbert""#));
        assert!(html.contains(r#"name="pages" value="lots""#));
        assert!(html.contains(r#"name="cover" value="https://covers/dune.jpg""#));
        assert!(html.contains(r#"name="read" checked"#));
    }

    #[tokio::test]
    async fn test_should_render_empty_dialog_fields() {
        let html = PageView::new("shelf", String::new()).render();
        assert!(html.contains(r#"<input type="text" name="title" required>"#));
        assert!(!html.contains("checked"));
    }
}
