//! Fixed interface strings per locale.

use crate::domains::catalog::Locale;

/// Heading block of a listing page.
#[derive(Debug, Clone, Copy)]
pub struct PageCopy {
    pub meta_title: &'static str,
    pub meta_description: &'static str,
    pub h1: &'static str,
    pub h2: &'static str,
    pub description: &'static str,
}

/// Interface strings for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub ai_tools: PageCopy,
    pub digi_tools: PageCopy,

    pub nav_ai_tools: &'static str,
    pub nav_digi_tools: &'static str,
    pub nav_article: &'static str,
    pub nav_changelog: &'static str,
    pub nav_submit_tool: &'static str,
    pub toggle_menu: &'static str,

    pub auth_loading: &'static str,
    pub auth_sign_in: &'static str,
    pub auth_account: &'static str,

    pub featured: &'static str,
    pub more: &'static str,
    pub empty: &'static str,
    pub not_found: &'static str,

    pub search_placeholder: &'static str,
    pub search_button: &'static str,
    pub search_title: &'static str,
    pub search_no_results: &'static str,

    pub submit_title: &'static str,
    pub submit_description: &'static str,
    pub tool_name: &'static str,
    pub tool_name_placeholder: &'static str,
    pub tool_url: &'static str,
    pub tool_url_placeholder: &'static str,
    pub tool_description: &'static str,
    pub tool_description_placeholder: &'static str,
    pub tool_category: &'static str,
    pub select_category: &'static str,
    pub submit: &'static str,
    pub submit_thanks: &'static str,
    pub error_name_required: &'static str,
    pub error_url_invalid: &'static str,
    pub error_category_invalid: &'static str,
}

const EN: Messages = Messages {
    ai_tools: PageCopy {
        meta_title: "DevToolset - Best AI Tools Directory",
        meta_description: "A curated directory of AI tools, grouped by what they help you do.",
        h1: "AI Tools Directory",
        h2: "Find the right AI tool for the job",
        description: "Chatbots, image generators, writing assistants and more, reviewed and organized.",
    },
    digi_tools: PageCopy {
        meta_title: "DevToolset - Digital Marketing Tools",
        meta_description: "A curated directory of digital marketing tools.",
        h1: "Digital Marketing Tools",
        h2: "Grow, measure and ship faster",
        description: "SEO, analytics, email and social tools in one place.",
    },
    nav_ai_tools: "AI Tools",
    nav_digi_tools: "Digital Tools",
    nav_article: "Articles",
    nav_changelog: "Changelog",
    nav_submit_tool: "Submit a tool",
    toggle_menu: "Toggle Menu",
    auth_loading: "Checking sign-in…",
    auth_sign_in: "Sign in",
    auth_account: "My account",
    featured: "Featured",
    more: "See more",
    empty: "Nothing here yet.",
    not_found: "Page not found.",
    search_placeholder: "Search tools…",
    search_button: "Search",
    search_title: "Search results",
    search_no_results: "No tools match your search.",
    submit_title: "Submit a tool",
    submit_description: "Know a tool that belongs here? Tell us about it.",
    tool_name: "Tool name",
    tool_name_placeholder: "e.g. ChatGPT",
    tool_url: "Tool URL",
    tool_url_placeholder: "https://",
    tool_description: "Description",
    tool_description_placeholder: "What does it do?",
    tool_category: "Category",
    select_category: "Select a category",
    submit: "Submit",
    submit_thanks: "Thanks! Your submission was received and will be reviewed.",
    error_name_required: "Please enter the tool name.",
    error_url_invalid: "Please enter a full http(s) URL.",
    error_category_invalid: "Please select a category.",
};

const ZH: Messages = Messages {
    ai_tools: PageCopy {
        meta_title: "DevToolset - AI 工具导航",
        meta_description: "精选 AI 工具目录，按用途分类。",
        h1: "AI 工具导航",
        h2: "为你的任务找到合适的 AI 工具",
        description: "聊天机器人、图像生成、写作助手等，精选并分类整理。",
    },
    digi_tools: PageCopy {
        meta_title: "DevToolset - 数字营销工具",
        meta_description: "精选数字营销工具目录。",
        h1: "数字营销工具",
        h2: "增长、分析、高效交付",
        description: "SEO、数据分析、邮件与社交媒体工具一站汇集。",
    },
    nav_ai_tools: "AI 工具",
    nav_digi_tools: "数字工具",
    nav_article: "文章",
    nav_changelog: "更新日志",
    nav_submit_tool: "提交工具",
    toggle_menu: "切换菜单",
    auth_loading: "正在检查登录状态…",
    auth_sign_in: "登录",
    auth_account: "我的账户",
    featured: "精选",
    more: "查看更多",
    empty: "暂无内容。",
    not_found: "页面不存在。",
    search_placeholder: "搜索工具…",
    search_button: "搜索",
    search_title: "搜索结果",
    search_no_results: "没有匹配的工具。",
    submit_title: "提交工具",
    submit_description: "知道值得收录的工具？告诉我们。",
    tool_name: "工具名称",
    tool_name_placeholder: "例如 ChatGPT",
    tool_url: "工具网址",
    tool_url_placeholder: "https://",
    tool_description: "描述",
    tool_description_placeholder: "它能做什么？",
    tool_category: "分类",
    select_category: "选择分类",
    submit: "提交",
    submit_thanks: "感谢提交！我们会尽快审核。",
    error_name_required: "请输入工具名称。",
    error_url_invalid: "请输入完整的 http(s) 网址。",
    error_category_invalid: "请选择分类。",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }
}
