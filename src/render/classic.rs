use super::BadgeView;
use super::palette;

pub(super) fn render(view: &BadgeView) -> String {
    let [color1, color2, color3] = palette::gradient(view.division);
    let BadgeView {
        tier_title,
        tier_rank,
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
            @keyframes delayFadeIn {{
                0% {{ opacity: 0; }}
                60% {{ opacity: 0; }}
                100% {{ opacity: 1; }}
            }}
            @keyframes fadeIn {{
                from {{ opacity: 0; }}
                to {{ opacity: 1; }}
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
                font-size: 1.45em;
                animation: fadeIn 0.8s ease-in-out forwards;
            }}
            text.tier-text {{
                font-weight: 700;
                font-size: 1.45em;
                opacity: 55%;
            }}
            .subtitle {{ font-weight: 500; font-size: 0.9em; }}
            .value {{ font-weight: 400; font-size: 0.9em; }}
            .percentage {{ font-weight: 300; font-size: 0.8em; }}
            .progress {{ font-size: 0.7em; }}
            .item {{
                opacity: 0;
                animation: delayFadeIn 1s ease-in-out forwards;
            }}
            .rate-bar {{
                stroke-dasharray: {bar_width};
                stroke-dashoffset: {bar_width};
                animation: rateBarAnimation 1.5s forwards ease-in-out;
            }}
        ]]>
    </style>
    <defs>
        <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="35%">
            <stop offset="10%" style="stop-color:{color1};stop-opacity:1"></stop>
            <stop offset="55%" style="stop-color:{color2};stop-opacity:1"></stop>
            <stop offset="100%" style="stop-color:{color3};stop-opacity:1"></stop>
        </linearGradient>
    </defs>
    <rect width="350" height="170" rx="10" ry="10" class="background"/>
    <text x="315" y="50" class="tier-text" text-anchor="end">{tier_title}{tier_rank}</text>
    <text x="35" y="50" class="boj-handle">{handle}</text>
    <g class="item" style="animation-delay: 200ms">
        <text x="35" y="79" class="subtitle">rate</text><text x="145" y="79" class="rate value">{rating}</text>
    </g>
    <g class="item" style="animation-delay: 400ms">
        <text x="35" y="99" class="subtitle">solved</text><text x="145" y="99" class="solved value">{solved}</text>
    </g>
    <g class="item" style="animation-delay: 600ms">
        <text x="35" y="119" class="subtitle">class</text><text x="145" y="119" class="class value">{class_text}</text>
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
