use axum::response::Html;

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Trackn Fitness API</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 0; display: flex; min-height: 100vh; align-items: center; justify-content: center; background: #0f1115; color: #e6e6e6; }
    main { max-width: 40rem; padding: 2rem; text-align: center; }
    h1 { font-size: 2rem; margin-bottom: 0.5rem; }
    p { color: #9aa0a6; line-height: 1.6; }
    a { color: #7cb7ff; text-decoration: none; }
    a:hover { text-decoration: underline; }
  </style>
</head>
<body>
  <main>
    <h1>Trackn Fitness API</h1>
    <p>A structured exercise database with GIF-based visual media, target
    muscles, equipment and body-part metadata.</p>
    <p>
      Browse the <a href="/docs">interactive documentation</a> or fetch the
      <a href="/swagger">OpenAPI document</a>. All feature routes live under
      <code>/api/v1</code>.
    </p>
  </main>
</body>
</html>
"#;

pub async fn home_page() -> Html<&'static str> {
    Html(HOME_PAGE)
}
