//! Bundled Grade 1-12 curriculum.

use crate::curriculum::Grade::{self, *};
use crate::curriculum::Subject::{self, *};

/// `(grade, subject, topic, subTopic)` rows, grouped by grade and subject.
pub const BUILTIN_CURRICULUM: &[(Grade, Subject, &str, &str)] = &[
    // Primary school
    (Grade1, Chinese, "Pinyin", "Initials & Finals"),
    (Grade1, Chinese, "Characters", "Basic Strokes"),
    (Grade1, Chinese, "Reading", "Short Sentences"),
    (Grade1, Math, "Arithmetic", "Addition (0-20)"),
    (Grade1, Math, "Arithmetic", "Subtraction (0-20)"),
    (Grade1, Math, "Geometry", "Basic Shapes"),
    (Grade2, Chinese, "Characters", "Radicals"),
    (Grade2, Chinese, "Reading", "Paragraph Comprehension"),
    (Grade2, Math, "Arithmetic", "Multiplication Table"),
    (Grade2, Math, "Arithmetic", "Mixed Operations"),
    (Grade3, Chinese, "Writing", "Short Diary"),
    (Grade3, Chinese, "Poetry", "Ancient Poems"),
    (Grade3, Math, "Arithmetic", "Division"),
    (Grade3, Math, "Geometry", "Perimeter"),
    (Grade3, English, "Vocabulary", "Colors & Animals"),
    (Grade3, English, "Speaking", "Greetings"),
    (Grade3, Science, "Nature", "Plants"),
    (Grade3, Science, "Physics", "Magnets"),
    (Grade4, Math, "Arithmetic", "Large Numbers"),
    (Grade4, Math, "Geometry", "Angles"),
    (Grade4, English, "Grammar", "Present Simple"),
    (Grade4, Science, "Physics", "Circuits"),
    (Grade5, Math, "Arithmetic", "Decimals"),
    (Grade5, Math, "Geometry", "Volume of Cubes"),
    (Grade5, Chinese, "Reading", "Classical Stories"),
    (Grade6, Math, "Arithmetic", "Fractions & Percentages"),
    (Grade6, Math, "Algebra", "Simple Equations"),
    (Grade6, English, "Grammar", "Past Tense"),
    // Junior high
    (Grade7, Math, "Number Theory", "Rational Numbers"),
    (Grade7, Math, "Algebra", "Linear Equations"),
    (Grade7, Math, "Geometry", "Intersecting Lines"),
    (Grade7, English, "Grammar", "Present Continuous"),
    (Grade7, English, "Reading", "Main Idea Extraction"),
    (Grade7, Chinese, "Classical", "Tang Poems"),
    (Grade7, Chinese, "Modern", "Narrative Writing"),
    (Grade7, Biology, "Cell Biology", "Cell Structure"),
    (Grade7, Biology, "Botany", "Photosynthesis"),
    (Grade7, History, "Ancient China", "Qin & Han Dynasties"),
    (Grade7, Geography, "Earth Science", "Longitude & Latitude"),
    (Grade7, Politics, "Ethics", "Respect & Etiquette"),
    (Grade7, Politics, "Law", "Basic Rights"),
    (Grade8, Math, "Algebra", "Linear Functions"),
    (Grade8, Math, "Geometry", "Pythagorean Theorem"),
    (Grade8, Math, "Geometry", "Congruence"),
    (Grade8, Physics, "Mechanics", "Force and Gravity"),
    (Grade8, Physics, "Optics", "Reflection of Light"),
    (Grade8, Physics, "Acoustics", "Sound Production"),
    (Grade8, English, "Grammar", "Comparatives"),
    (Grade8, English, "Vocabulary", "Travel"),
    (Grade8, Biology, "Genetics", "Inheritance Basics"),
    (Grade8, History, "Modern History", "Opium Wars"),
    (Grade8, Geography, "China Geography", "Topography"),
    (Grade8, Politics, "Law", "Constitution Basics"),
    (Grade9, Math, "Algebra", "Quadratic Equations"),
    (Grade9, Math, "Geometry", "Circles"),
    (Grade9, Math, "Probability", "Random Events"),
    (Grade9, Physics, "Electromagnetism", "Ohm's Law"),
    (Grade9, Physics, "Energy", "Work and Power"),
    (Grade9, Chemistry, "Matter", "Periodic Table"),
    (Grade9, Chemistry, "Reactions", "Oxidation"),
    (Grade9, Chemistry, "Substances", "Acids and Bases"),
    (Grade9, English, "Grammar", "Passive Voice"),
    (Grade9, History, "World History", "Industrial Revolution"),
    (Grade9, Politics, "Society", "Social Responsibility"),
    // Senior high
    (Grade10, Math, "Functions", "Sets & Functions"),
    (Grade10, Math, "Functions", "Exponential/Logarithmic"),
    (Grade10, Physics, "Mechanics", "Kinematics"),
    (Grade10, Physics, "Mechanics", "Newton's Laws"),
    (Grade10, Chemistry, "Structure", "Atomic Structure"),
    (Grade10, Chemistry, "Reactions", "Ionic Reactions"),
    (Grade10, English, "Reading", "Academic Articles"),
    (Grade10, English, "Grammar", "Non-finite Verbs"),
    (Grade10, Politics, "Economics", "Market Economy"),
    (Grade11, Math, "Geometry", "Solid Geometry"),
    (Grade11, Math, "Probability", "Statistics"),
    (Grade11, Physics, "Electromagnetism", "Magnetic Fields"),
    (Grade11, Chemistry, "Organic", "Hydrocarbons"),
    (Grade11, Biology, "Genetics", "DNA Replication"),
    (Grade11, History, "World History", "Cold War"),
    (Grade12, Math, "Calculus", "Derivatives"),
    (Grade12, Math, "Review", "Comprehensive Analysis"),
    (Grade12, Physics, "Modern Physics", "Quantum Basics"),
    (Grade12, Physics, "Review", "Mechanics Advanced"),
    (Grade12, Chemistry, "Review", "Experimental Design"),
    (Grade12, English, "Writing", "Advanced Composition"),
    (Grade12, Chinese, "Writing", "Argumentative Essays"),
];
