//! Embedded HTML templates.

pub(super) const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", BASE_TEMPLATE),
    ("main.html", MAIN_TEMPLATE),
    ("documentation.html", DOCUMENTATION_TEMPLATE),
    ("not_found.html", NOT_FOUND_TEMPLATE),
];

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% block title %}{{ site_title }}{% endblock %}</title>
    <link rel="icon" href="/favicon/favicon.ico">
    <link rel="stylesheet" href="/static/style.css">
    <style>
        body { margin: 0; font-family: "Fira Sans", -apple-system, sans-serif; line-height: 1.6; }
        body.dark { background: #121212; color: #e0e0e0; }
        body.light { background: #ffffff; color: #1a1a1a; }
        @media (prefers-color-scheme: dark) { body.auto { background: #121212; color: #e0e0e0; } }
        header { display: flex; align-items: center; gap: 1.5rem; padding: 0.75rem 1.5rem; background: #5898d4; }
        header a { color: #fff; text-decoration: none; }
        header form { margin-left: auto; }
        .layout { display: flex; gap: 2rem; padding: 1.5rem; }
        .doc-menu { min-width: 14rem; }
        .doc-menu a.active { font-weight: bold; }
        pre { padding: 0.75rem; border-radius: 4px; background: rgba(127, 127, 127, 0.15); overflow-x: auto; }
    </style>
</head>
<body class="{{ dark_mode }}">
    <header>
        <a href="/"><img src="/logo.png" alt="{{ site_title }}" height="28"></a>
        <a href="/documentation">Documentation</a>
        <form action="/api/search" method="get">
            <input type="search" name="q" placeholder="Search documentation">
        </form>
        <button id="dark-mode-toggle" type="button">Toggle dark mode</button>
    </header>
    {% block content %}{% endblock %}
    <script>
        document.getElementById('dark-mode-toggle').addEventListener('click', function () {
            var dark = !document.body.classList.contains('dark');
            document.body.classList.remove('dark', 'light', 'auto');
            document.body.classList.add(dark ? 'dark' : 'light');
            fetch('/dark_mode', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ value: dark })
            });
        });
    </script>
</body>
</html>"##;

const MAIN_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<main class="landing">
    <section class="hero">
        <h1>{{ site_title }}</h1>
        <p>Create web-based user interfaces with Python. Buttons, dialogs, Markdown, 3D scenes,
        plots and much more, all shown in your browser.</p>
        <p><a href="/documentation">Read the documentation</a></p>
    </section>
    <section class="install">
        <h2>Installation</h2>
        <pre><code>python3 -m pip install nicegui</code></pre>
    </section>
</main>
{% endblock %}"##;

const DOCUMENTATION_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}{{ entry.title }} | {{ site_title }}{% endblock %}
{% block content %}
<div class="layout">
    {% if with_menu %}
    <nav class="doc-menu">
        <ul>
            {% for item in menu %}
            <li><a href="{{ item.url }}"{% if item.active %} class="active"{% endif %}>{{ item.title }}</a></li>
            {% endfor %}
        </ul>
    </nav>
    {% endif %}
    <article class="doc-page" data-slug="{{ entry.slug }}">
        <h1>{{ entry.title }}</h1>
        {% if entry.summary %}<p class="summary">{{ entry.summary }}</p>{% endif %}
        {% for section in entry.sections %}
        <section>
            {% if section.title %}<h2>{{ section.title }}</h2>{% endif %}
            {% for paragraph in section.paragraphs %}
            <p>{{ paragraph }}</p>
            {% endfor %}
            {% if section.code %}<pre><code>{{ section.code }}</code></pre>{% endif %}
        </section>
        {% endfor %}
        {% if links %}
        <ul class="doc-links">
            {% for item in links %}
            <li><a href="{{ item.url }}">{{ item.title }}</a>{% if item.summary %}: {{ item.summary }}{% endif %}</li>
            {% endfor %}
        </ul>
        {% endif %}
    </article>
</div>
{% endblock %}"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}Not found | {{ site_title }}{% endblock %}
{% block content %}
<main class="not-found">
    <h1>404</h1>
    <p>There is no documentation page called <code>{{ slug }}</code>.</p>
    <p><a href="/documentation">Back to the documentation</a></p>
</main>
{% endblock %}"##;
