//! Locale label sets for console and chart text
//!
//! The original evaluation run reported in Chinese; the `zh` set keeps that
//! text verbatim and `en` carries the translation. Charts receive their
//! strings through the injected plot configuration rather than probing the
//! platform at render time.

use crate::cli::Locale;

/// All user-visible strings for one locale
#[derive(Debug, Clone)]
pub struct LabelSet {
    pub mean_rate: &'static str,
    pub std_dev: &'static str,
    pub extended_heading: &'static str,
    pub correlation_heading: &'static str,
    pub correlation_coefficient: &'static str,
    pub correlation_undefined: &'static str,
    pub ttest_result: &'static str,
    pub verdict_prefix: &'static str,
    pub significant: &'static str,
    pub not_significant: &'static str,
    pub self_mean_note: &'static str,
    pub chart_written: &'static str,

    pub hist_title: &'static str,
    pub hist_x: &'static str,
    pub hist_y: &'static str,
    pub box_title: &'static str,
    pub box_y: &'static str,
    pub attempts_title: &'static str,
    pub attempts_x: &'static str,
    pub time_title: &'static str,
    pub time_x: &'static str,
    pub rate_axis: &'static str,

    /// Typeface used for chart text when none is given on the command line
    pub default_font: &'static str,
}

impl LabelSet {
    /// Label set for the requested locale
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::english(),
            Locale::Zh => Self::chinese(),
        }
    }

    /// English labels
    pub fn english() -> Self {
        Self {
            mean_rate: "Mean success rate",
            std_dev: "Standard deviation",
            extended_heading: "Extended statistics (SIMD-accelerated via Trueno)",
            correlation_heading: "Correlation between batch time and success rate:",
            correlation_coefficient: "Correlation coefficient",
            correlation_undefined: "undefined (zero variance)",
            ttest_result: "t-test result",
            verdict_prefix: "Hypothesis test on the success rate: ",
            significant: "significant difference",
            not_significant: "no significant difference",
            self_mean_note:
                "note: the t-test reference is the sample's own mean; pass --null-mean to compare against a benchmark rate",
            chart_written: "chart written:",

            hist_title: "Success Rate Distribution",
            hist_x: "Success rate",
            hist_y: "Density",
            box_title: "Success Rate Distribution (Box Plot)",
            box_y: "Success rate",
            attempts_title: "Attempts vs Success Rate",
            attempts_x: "Attempts",
            time_title: "Batch Time vs Success Rate",
            time_x: "Batch time (seconds)",
            rate_axis: "Success rate",

            default_font: "sans-serif",
        }
    }

    /// Chinese labels, matching the original evaluation output
    pub fn chinese() -> Self {
        Self {
            mean_rate: "平均成功率",
            std_dev: "标准差",
            extended_heading: "扩展统计（Trueno SIMD 加速）",
            correlation_heading: "实验时间与成功率的相关性分析:",
            correlation_coefficient: "相关系数",
            correlation_undefined: "无法计算（方差为零）",
            ttest_result: "t检验结果",
            verdict_prefix: "关于成功率的假设检验结果表明：",
            significant: "存在显著差异",
            not_significant: "没有足够证据表明存在显著差异",
            self_mean_note: "注：t检验以样本自身均值为基准，如需与目标值比较请使用 --null-mean",
            chart_written: "图表已保存:",

            hist_title: "成功率分布",
            hist_x: "成功率",
            hist_y: "频率",
            box_title: "成功率分布（箱线图）",
            box_y: "成功率",
            attempts_title: "尝试次数与成功率的关系",
            attempts_x: "尝试次数",
            time_title: "实验时间与成功率的关系",
            time_x: "实验时间 (单位:秒)",
            rate_axis: "成功率",

            default_font: "Noto Sans CJK SC",
        }
    }
}
