use super::{BadgeView, emblem, palette};
use crate::domain::Division;

/// Large glyph drawn inside the division outline.
fn tier_number(view: &BadgeView) -> &str {
    match view.division {
        Some(Division::Master) => "M",
        _ => view.tier_rank.as_str(),
    }
}

pub(super) fn render(view: &BadgeView) -> String {
    let [color1, color2, color3] = palette::gradient(view.division);
    let tier_number = tier_number(view);
    let emblem = emblem::emblem(view.division).trim_end();
    let BadgeView {
        handle,
        rating,
        needed_rating,
        solved,
        class_text,
        percentage,
        bar_width,
        ..
    } = view;

    format!(
        r#"<!DOCTYPE svg PUBLIC
    "-//W3C//DTD SVG 1.1//EN"
    "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg height="170" width="350"
    version="1.1"
    xmlns="http://www.w3.org/2000/svg"
    xmlns:xlink="http://www.w3.org/1999/xlink"
    xml:space="preserve">
    <style type="text/css">
        <![CDATA[
            @import url('https://fonts.googleapis.com/css2?family=Noto+Sans+KR:wght@300;400;500;700&display=block');
            @keyframes fadeIn {{
                0% {{ opacity: 0; }}
                100% {{ opacity: 1; }}
            }}
            @keyframes delayFadeIn {{
                0% {{ opacity: 0; }}
                80% {{ opacity: 0; }}
                100% {{ opacity: 1; }}
            }}
            @keyframes rateBarAnimation {{
                0% {{ stroke-dashoffset: {bar_width}; }}
                70% {{ stroke-dashoffset: {bar_width}; }}
                100% {{ stroke-dashoffset: 35; }}
            }}
            .background {{ fill: url(#grad); }}
            text {{
                fill: white;
                font-family: 'Noto Sans KR', sans-serif;
            }}
            text.boj-handle {{
                font-weight: 700;
                font-size: 1.30em;
                animation: fadeIn 1s ease-in-out forwards;
            }}
            text.tier-number {{
                font-size: 3.1em;
                font-weight: 700;
                text-anchor: middle;
                animation: delayFadeIn 2s ease-in-out forwards;
            }}
            .subtitle {{ font-weight: 500; font-size: 0.9em; }}
            .value {{ font-weight: 400; font-size: 0.9em; }}
            .percentage {{ font-weight: 300; font-size: 0.8em; }}
            .progress {{ font-size: 0.7em; }}
            .item {{
                opacity: 0;
                animation: delayFadeIn 2s ease-in-out forwards;
            }}
            .rate-bar {{
                stroke-dasharray: {bar_width};
                stroke-dashoffset: {bar_width};
                animation: rateBarAnimation 1.5s forwards ease-in-out;
            }}
            .tier-title {{ animation: delayFadeIn 2s ease-in-out forwards; }}
        ]]>
    </style>
    <defs>
        <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="35%">
            <stop offset="10%" style="stop-color:{color1};stop-opacity:1">
                <animate attributeName="stop-opacity" values="0.7; 0.73; 0.9; 0.97; 1; 0.97; 0.9; 0.73; 0.7;" dur="4s" repeatCount="indefinite" repeatDur="01:00"></animate>
            </stop>
            <stop offset="55%" style="stop-color:{color2};stop-opacity:1">
                <animate attributeName="stop-opacity" values="1; 0.95; 0.93; 0.95; 1;" dur="4s" repeatCount="indefinite" repeatDur="01:00"></animate>
            </stop>
            <stop offset="100%" style="stop-color:{color3};stop-opacity:1">
                <animate attributeName="stop-opacity" values="1; 0.97; 0.9; 0.83; 0.8; 0.83; 0.9; 0.97; 1;" dur="4s" repeatCount="indefinite" repeatDur="01:00"></animate>
            </stop>
        </linearGradient>
    </defs>
    <rect width="350" height="170" rx="10" ry="10" class="background"/>
    <g stroke-width="2" stroke="white">
        <line x1="34" y1="50" x2="34" y2="105">
            <animate attributeName="y2" dur="0.8s" fill="freeze" calcMode="spline" keyTimes="0; 0.675; 1" keySplines="0 0 1 1; 0.5 0 0.5 1" values="50; 50; 105"/>
        </line>
        <line x1="34" y1="105" x2="67" y2="125">
            <animate attributeName="x2" dur="1s" fill="freeze" calcMode="spline" keyTimes="0; 0.8; 1" keySplines="0 0 1 1; 0.5 0 0.5 1" values="34; 34; 67"/>
            <animate attributeName="y2" dur="1s" fill="freeze" calcMode="spline" keyTimes="0; 0.8; 1" keySplines="0 0 1 1; 0.5 0 0.5 1" values="105; 105; 125"/>
        </line>
        <line x1="67" y1="125" x2="100" y2="105">
            <animate attributeName="x2" dur="1.2s" fill="freeze" calcMode="spline" keyTimes="0; 0.83333; 1" keySplines="0 0 1 1; 0.5 0 0.5 1" values="67; 67; 100"/>
            <animate attributeName="y2" dur="1.2s" fill="freeze" calcMode="spline" keyTimes="0; 0.83333; 1" keySplines="0 0 1 1; 0.5 0 0.5 1" values="125; 125; 105"/>
        </line>
        <line x1="100" y1="105" x2="100" y2="50">
            <animate attributeName="y2" dur="1.5s" fill="freeze" calcMode="spline" keyTimes="0; 0.8; 1" keySplines="0 0 1 1; 0.5 0 0.5 1" values="105; 105; 50"/>
        </line>
        <line x1="67" y1="130" x2="34" y2="110">
            <animate attributeName="x2" dur="1.9s" fill="freeze" calcMode="spline" keyTimes="0; 0.78947; 1" keySplines="0 0 1 1; 0.5 0 0.5 1" values="67; 67; 34"/>
            <animate attributeName="y2" dur="1.9s" fill="freeze" calcMode="spline" keyTimes="0; 0.78947; 1" keySplines="0 0 1 1; 0.5 0 0.5 1" values="130; 130; 110"/>
        </line>
        <line x1="67" y1="130" x2="100" y2="110">
            <animate attributeName="x2" dur="1.9s" fill="freeze" calcMode="spline" keyTimes="0; 0.78947; 1" keySplines="0 0 1 1; 0.5 0 0.5 1" values="67; 67; 100"/>
            <animate attributeName="y2" dur="1.9s" fill="freeze" calcMode="spline" keyTimes="0; 0.78947; 1" keySplines="0 0 1 1; 0.5 0 0.5 1" values="130; 130; 110"/>
        </line>
    </g>
    <text x="135" y="50" class="boj-handle">{handle}</text>
    <g transform="translate(18 12)" class="tier-title">{emblem}</g>
    <text x="67" y="100" class="tier-number">{tier_number}</text>
    <g class="item" style="animation-delay: 200ms">
        <text x="135" y="79" class="subtitle">rate</text><text x="225" y="79" class="rate value">{rating}</text>
    </g>
    <g class="item" style="animation-delay: 400ms">
        <text x="135" y="99" class="subtitle">solved</text><text x="225" y="99" class="solved value">{solved}</text>
    </g>
    <g class="item" style="animation-delay: 600ms">
        <text x="135" y="119" class="subtitle">class</text><text x="225" y="119" class="class value">{class_text}</text>
    </g>
    <g class="rate-bar" style="animation-delay: 800ms">
        <line x1="35" y1="142" x2="{bar_width}" y2="142" stroke-width="4" stroke="floralwhite" stroke-linecap="round"/>
    </g>
    <line x1="35" y1="142" x2="290" y2="142" stroke-width="4" stroke-opacity="40%" stroke="floralwhite" stroke-linecap="round"/>
    <text x="297" y="142" alignment-baseline="middle" class="percentage">{percentage}%</text>
    <text x="293" y="157" class="progress" text-anchor="end">{rating} / {needed_rating}</text>
</svg>
"#
    )
}
