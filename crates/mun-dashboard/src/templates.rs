//! HTML templates for the dashboard.
//!
//! Uses a simple template approach with Tailwind CSS and HTMX. Every value that
//! comes from a datastore goes through [`escape`] before it is interpolated.

use mun_core::AttendanceStatus;

/// Base HTML layout wrapper with the persistent top navigation bar.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en" x-data="{{ darkMode: localStorage.getItem('darkMode') === 'true' }}" :class="{{ 'dark': darkMode }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - MUN Attendance</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {{
            darkMode: 'class',
            theme: {{
                extend: {{
                    colors: {{
                        primary: {{
                            50: '#eff6ff',
                            100: '#dbeafe',
                            500: '#3b82f6',
                            600: '#2563eb',
                            700: '#1d4ed8',
                            900: '#1e3a8a',
                        }}
                    }}
                }}
            }}
        }}
    </script>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script defer src="https://unpkg.com/alpinejs@3.x.x/dist/cdn.min.js"></script>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <style>
        [x-cloak] {{ display: none !important; }}
        .htmx-indicator {{ display: none; }}
        .htmx-request .htmx-indicator {{ display: inline-block; }}
    </style>
</head>
<body class="bg-gray-50 dark:bg-gray-900 min-h-screen">
    {NAV}
    <main class="p-6 lg:p-8">
        <div class="max-w-7xl mx-auto">
            {content}
        </div>
    </main>
</body>
</html>"##,
        title = escape(title),
        NAV = nav_template(),
    )
}

fn nav_template() -> &'static str {
    r##"<nav class="bg-primary-600 dark:bg-primary-900 text-white px-4 py-3 sticky top-0 z-50 shadow-lg">
        <div class="flex items-center justify-between max-w-7xl mx-auto">
            <div class="flex items-center gap-6">
                <a href="/" class="font-semibold text-lg"><i class="fas fa-landmark"></i> MUN Attendance</a>
                <a href="/participants" class="hover:text-primary-100">Participants</a>
                <a href="/staff" class="hover:text-primary-100">Staff</a>
                <a href="/about" class="hover:text-primary-100">About</a>
            </div>
            <div class="flex items-center gap-4">
                <button @click="darkMode = !darkMode; localStorage.setItem('darkMode', darkMode)"
                        class="p-2 hover:bg-primary-700 rounded-lg">
                    <i class="fas" :class="darkMode ? 'fa-sun' : 'fa-moon'"></i>
                </button>
                <form method="POST" action="/logout">
                    <button type="submit" class="p-2 hover:bg-primary-700 rounded-lg"><i class="fas fa-sign-out-alt"></i></button>
                </form>
            </div>
        </div>
    </nav>"##
}

/// Card component.
pub fn card(title: &str, content: &str) -> String {
    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h3>
            </div>
            <div class="p-6">
                {content}
            </div>
        </div>"##
    )
}

/// Stats card component.
pub fn stats_card(title: &str, value: &str, icon: &str, color: &str) -> String {
    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{title}</p>
                    <p class="text-2xl font-bold text-gray-900 dark:text-white mt-1">{value}</p>
                </div>
                <div class="w-12 h-12 rounded-full bg-{color}-100 dark:bg-{color}-900/30 flex items-center justify-center">
                    <i class="fas fa-{icon} text-{color}-500 text-xl"></i>
                </div>
            </div>
        </div>"##
    )
}

/// Input field component.
pub fn input(name: &str, label: &str, input_type: &str, value: &str, placeholder: &str) -> String {
    format!(
        r##"<div class="space-y-1">
            <label for="{name}" class="block text-sm font-medium text-gray-700 dark:text-gray-300">{label}</label>
            <input type="{input_type}" name="{name}" id="{name}" value="{value}" placeholder="{placeholder}"
                   class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500">
        </div>"##,
        value = escape(value),
    )
}

/// Select field component. Options are `(value, text, selected)`.
pub fn select(name: &str, label: &str, options: &[(String, String, bool)]) -> String {
    let options_html: String = options
        .iter()
        .map(|(value, text, selected)| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape(value),
                if *selected { " selected" } else { "" },
                escape(text)
            )
        })
        .collect();

    format!(
        r##"<div class="space-y-1">
            <label for="{name}" class="block text-sm font-medium text-gray-700 dark:text-gray-300">{label}</label>
            <select name="{name}" id="{name}"
                    class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white">
                {options_html}
            </select>
        </div>"##
    )
}

/// Badge component.
pub fn badge(text: &str, color: &str) -> String {
    format!(
        r##"<span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-{color}-100 dark:bg-{color}-900/30 text-{color}-800 dark:text-{color}-300">{text}</span>"##
    )
}

/// Colored badge for an attendance status.
pub fn status_badge(status: AttendanceStatus) -> String {
    let color = match status {
        AttendanceStatus::Present => "green",
        AttendanceStatus::Absent => "red",
        AttendanceStatus::PresentOnAccount => "yellow",
    };
    badge(status.as_str(), color)
}

/// Table component. Cells are inserted as-is; escape them first.
pub fn table(headers: &[&str], rows: &[String]) -> String {
    let headers_html: String = headers
        .iter()
        .map(|h| format!(r#"<th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{h}</th>"#))
        .collect();

    format!(
        r##"<div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-800">
                    <tr>{headers_html}</tr>
                </thead>
                <tbody class="bg-white dark:bg-gray-900 divide-y divide-gray-200 dark:divide-gray-700">
                    {rows}
                </tbody>
            </table>
        </div>"##,
        rows = rows.concat(),
    )
}

/// Table cell.
pub fn cell(content: &str) -> String {
    format!(r#"<td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-gray-100">{content}</td>"#)
}

/// Empty state component.
pub fn empty_state(icon: &str, title: &str, description: &str) -> String {
    format!(
        r##"<div class="text-center py-12">
            <i class="fas fa-{icon} text-4xl text-gray-400 dark:text-gray-600 mb-4"></i>
            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{title}</h3>
            <p class="mt-1 text-gray-500 dark:text-gray-400">{description}</p>
        </div>"##
    )
}

/// Inline error banner.
pub fn error_banner(message: &str) -> String {
    format!(
        r##"<div class="p-4 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg text-red-700 dark:text-red-400">
            <i class="fas fa-exclamation-circle"></i> {}
        </div>"##,
        escape(message)
    )
}

/// Loading spinner.
pub fn spinner() -> &'static str {
    r##"<div class="flex items-center justify-center py-8">
        <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-primary-600"></div>
    </div>"##
}

/// HTML escape.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
